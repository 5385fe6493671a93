/////////////////////////////////////////////////////////////////////////////////////////////
//
// Checks that plan construction populates and reuses the Bessel coefficient cache.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use equator::assert;
use ferreus_nufft::{
    Complex64, NufftParams, build_nufft1, build_nufft2, clear_coefficient_cache,
    coefficient_cache_len,
};

// The cache is process-wide, so everything touching it lives in a single test.
#[test]
fn plans_share_cached_coefficients() {
    clear_coefficient_cache();
    assert!(coefficient_cache_len() == 0);

    let points = [0.03, 0.26, 0.44, 0.71, 0.9];
    let first = build_nufft1(&points, 1e-8).unwrap();
    assert!(coefficient_cache_len() == 1);

    // Same points and accuracy give the same (rank, gamma) key.
    let second = build_nufft1(&points, 1e-8).unwrap();
    assert!(coefficient_cache_len() == 1);

    let c = [Complex64::new(0.5, -0.25); 5];
    let a = first.apply(&c).unwrap();
    let b = second.apply(&c).unwrap();
    assert!(a.iter().zip(&b).all(|(x, y)| (x - y).norm() < 1e-14));

    // Uniform frequencies: gamma is zero, a new (1, 0.0) entry.
    let frequencies = [0.0, 1.0, 2.0, 3.0, 4.0];
    let _ = build_nufft2(&frequencies, 1e-8).unwrap();
    assert!(coefficient_cache_len() == 2);

    // Opting out leaves the cache untouched.
    let params = NufftParams::builder()
        .cache_coefficients(false)
        .fixed_rank(3)
        .build();
    let _ = ferreus_nufft::Nufft1Plan::new(&points, 1e-8, Some(params)).unwrap();
    assert!(coefficient_cache_len() == 2);

    clear_coefficient_cache();
    assert!(coefficient_cache_len() == 0);
}
