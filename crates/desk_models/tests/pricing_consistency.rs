//! Cross-module consistency checks between direct pricing and the
//! generated price surface, using the dashboard's default contract.

use approx::assert_relative_eq;
use desk_models::analytical::BlackScholes;
use desk_models::surface::PriceSurface;

/// The dashboard's default contract: T=1, K=45, S=40, σ=0.2, r=0.05.
fn default_contract() -> BlackScholes {
    BlackScholes::new(1.0, 45.0, 40.0, 0.2, 0.05).unwrap()
}

/// Evenly spaced grid of `n` points from `lo` to `hi` inclusive.
fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![lo];
    }
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| lo + step * i as f64).collect()
}

#[test]
fn default_contract_prices_satisfy_parity() {
    let bs = default_contract();
    let (call, put) = bs.calculate_prices();

    // Closed-form values for the default contract
    assert_relative_eq!(call, 2.0821960736770055, epsilon = 1e-9);
    assert_relative_eq!(put, 4.88752017620914, epsilon = 1e-9);

    // C - P = S - K·e^(-rT)
    let forward = 40.0 - 45.0 * (-0.05_f64).exp();
    assert_relative_eq!(call - put, forward, epsilon = 1e-8);
}

#[test]
fn gamma_and_vega_shared_across_legs() {
    // Gamma and vega are not sign-differentiated: one value serves both
    // legs, while the deltas differ by exactly one.
    let greeks = default_contract().calculate_greeks();
    assert!(greeks.gamma > 0.0);
    assert!(greeks.vega > 0.0);
    assert_relative_eq!(
        greeks.call_delta - greeks.put_delta,
        1.0,
        epsilon = 1e-12
    );
}

#[test]
fn ten_point_heatmap_grid_matches_direct_pricing() {
    // The dashboard builds 10x10 grids from min/max sliders.
    let bs = default_contract();
    let spots = linspace(32.0, 48.0, 10);
    let vols = linspace(0.1, 0.3, 10);

    let surface = PriceSurface::generate(&bs, &spots, &vols, 45.0).unwrap();
    assert_eq!(surface.shape(), (10, 10));

    for (i, &vol) in vols.iter().enumerate() {
        for (j, &spot) in spots.iter().enumerate() {
            let (call, put) = BlackScholes::new(1.0, 45.0, spot, vol, 0.05)
                .unwrap()
                .calculate_prices();
            assert_relative_eq!(surface.call_prices()[i][j], call, epsilon = 1e-12);
            assert_relative_eq!(surface.put_prices()[i][j], put, epsilon = 1e-12);
        }
    }
}

#[test]
fn surface_cells_satisfy_parity() {
    let bs = default_contract();
    let spots = linspace(32.0, 48.0, 5);
    let vols = linspace(0.1, 0.3, 4);
    let strike = 45.0;

    let surface = PriceSurface::generate(&bs, &spots, &vols, strike).unwrap();
    let discounted_strike = strike * (-0.05_f64).exp();

    for i in 0..vols.len() {
        for (j, &spot) in spots.iter().enumerate() {
            let call = surface.call_prices()[i][j];
            let put = surface.put_prices()[i][j];
            assert_relative_eq!(call - put, spot - discounted_strike, epsilon = 1e-8);
        }
    }
}
