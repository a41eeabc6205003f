use mcmm::categorical::{cumulative, findx, sample_with_rng, CategoricalSampler};
use mcmm::coin::{count, BiasedCoin};
use mcmm::{Joint, SampleError};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Non-negative weights normalized onto the simplex.
fn simplex(max_k: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..10.0, 1..max_k).prop_filter_map("zero mass", |w| {
        let s: f64 = w.iter().sum();
        (s > 0.0).then(|| w.iter().map(|x| x / s).collect())
    })
}

proptest! {
    #[test]
    fn prop_sample_len_and_membership(
        p in simplex(12),
        n in 0usize..500,
        seed in any::<u64>(),
    ) {
        let labels: Vec<usize> = (0..p.len()).map(|i| i * 10).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let xs = sample_with_rng(&labels, &p, n, &mut rng).expect("valid simplex");

        prop_assert_eq!(xs.len(), n);
        for x in &xs {
            prop_assert!(labels.contains(x));
        }
    }

    #[test]
    fn prop_zero_mass_never_sampled(
        p in simplex(8),
        zero_at in 0usize..8,
        seed in any::<u64>(),
    ) {
        // Move mass off one label and renormalize.
        let zero_at = zero_at % p.len();
        let mut q = p;
        q[zero_at] = 0.0;
        let s: f64 = q.iter().sum();
        prop_assume!(s > 0.0);
        for x in &mut q {
            *x /= s;
        }

        let labels: Vec<usize> = (0..q.len()).collect();
        let sampler = CategoricalSampler::new(&labels, &q).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..200 {
            prop_assert_ne!(sampler.sample_index_with_rng(&mut rng), zero_at);
        }
    }

    #[test]
    fn prop_findx_is_smallest_qualifying_index(
        p in simplex(16),
        r in 0.0f64..=1.0,
    ) {
        let c = cumulative(&p);
        let i = findx(&c, r);

        prop_assert!(i < c.len());
        // Minimality: every earlier entry is below r.
        prop_assert!(c[..i].iter().all(|&ci| ci < r));
        // Qualifies, unless clamped at the end.
        prop_assert!(c[i] >= r || i == c.len() - 1);
    }

    #[test]
    fn prop_findx_matches_linear_scan(
        p in simplex(16),
        r in 0.0f64..1.0,
    ) {
        let c = cumulative(&p);
        let linear = c.iter().position(|&ci| ci >= r).unwrap_or(c.len() - 1);
        prop_assert_eq!(findx(&c, r), linear);
    }

    #[test]
    fn prop_cumulative_non_decreasing(p in simplex(32)) {
        let c = cumulative(&p);
        prop_assert_eq!(c.len(), p.len());
        prop_assert!(c.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!((c[c.len() - 1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_length_mismatch_detected(
        p in simplex(8),
        extra in 1usize..4,
    ) {
        let labels: Vec<usize> = (0..p.len() + extra).collect();
        let err = CategoricalSampler::new(&labels, &p).expect_err("lengths differ");
        prop_assert_eq!(
            err,
            SampleError::LengthMismatch { labels: p.len() + extra, probabilities: p.len() }
        );
    }

    #[test]
    fn prop_scaled_mass_rejected(
        p in simplex(8),
        scale in prop_oneof![0.1f64..0.99, 1.01f64..3.0],
    ) {
        let q: Vec<f64> = p.iter().map(|x| x * scale).collect();
        let labels: Vec<usize> = (0..q.len()).collect();
        prop_assert!(matches!(
            CategoricalSampler::new(&labels, &q),
            Err(SampleError::InvalidDistribution(_))
        ));
    }
}

proptest! {
    #[test]
    fn prop_coin_sequence_tally(
        p in 0.0f64..=1.0,
        n in 0usize..300,
        seed in any::<u64>(),
    ) {
        let coin = BiasedCoin::new(p).expect("p in [0, 1]");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let seq = coin.get_sequence_with_rng(n, &mut rng);
        prop_assert_eq!(seq.len(), n);
        prop_assert_eq!(count(&seq).total(), n);
    }

    #[test]
    fn prop_exact_posterior_is_distribution(
        p_x in simplex(6),
        ky in 2usize..5,
        seed in any::<u64>(),
    ) {
        // Random row-stochastic likelihood table from a seeded generator.
        use rand::Rng;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let p_y_x: Vec<Vec<f64>> = (0..p_x.len())
            .map(|_| {
                let w: Vec<f64> = (0..ky).map(|_| rng.random_range(0.01..1.0)).collect();
                let s: f64 = w.iter().sum();
                w.into_iter().map(|x| x / s).collect()
            })
            .collect();
        let joint = Joint::new(p_x, p_y_x).expect("valid tables");

        let p_y = joint.marginal_y();
        prop_assert!((p_y.iter().sum::<f64>() - 1.0).abs() < 1e-9);

        for k in 0..ky {
            let post = joint.posterior_x_given_y(k).expect("every y has mass");
            prop_assert!(post.iter().all(|&x| (0.0..=1.0 + 1e-12).contains(&x)));
            prop_assert!((post.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }
}
