use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_len() {
    assert_eq!(RandomSampler::new(false, None).len(10), 10);
    assert_eq!(RandomSampler::new(false, Some(5)).len(10), 5);
    assert_eq!(RandomSampler::new(true, Some(25)).len(10), 25);
    assert_eq!(RandomSampler::new(false, Some(25)).len(10), 0);
    assert_eq!(RandomSampler::new(true, None).len(0), 0);
}

#[test]
fn test_random_sampler_without_replacement_is_a_permutation() {
    let sampler = RandomSampler::new(false, None);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 10);
    let unique: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique, (0..10).collect());
}

#[test]
fn test_random_sampler_subset_without_replacement() {
    let sampler = RandomSampler::new(false, Some(4));
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 4);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 4);
    assert!(indices.iter().all(|&i| i < 10));
}

#[test]
fn test_random_sampler_with_replacement() {
    let sampler = RandomSampler::new(true, Some(50));
    let indices: Vec<usize> = sampler.iter(3).collect();
    assert_eq!(indices.len(), 50);
    assert!(indices.iter().all(|&i| i < 3));
}

#[test]
fn test_random_sampler_oversampling_yields_nothing() {
    let sampler = RandomSampler::new(false, Some(11));
    assert_eq!(sampler.iter(10).count(), 0);
}

#[test]
fn test_random_sampler_seed_is_reproducible() {
    let a: Vec<usize> = RandomSampler::new(false, None).with_seed(7).iter(20).collect();
    let b: Vec<usize> = RandomSampler::new(false, None).with_seed(7).iter(20).collect();
    assert_eq!(a, b);
}
