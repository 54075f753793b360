//! Supplier ranking over the offer matrix.
//!
//! Scores every offer for a part with a weighted linear scalarization of
//! price, delivery time, and rating deficit, and picks the minimum. Lower is
//! better. The scaling constants bring the three units to comparable
//! magnitude; see [`RankingWeights`].

use crate::config::RankingWeights;
use crate::models::{BestSupplier, SupplierOffer};

/// Score one offer. Lower scores rank higher.
pub fn score_offer(offer: &SupplierOffer, weights: &RankingWeights) -> f64 {
    offer.unit_price * weights.price_weight
        + offer.delivery_days as f64 * weights.delivery_scale * weights.delivery_weight
        + (weights.max_rating - offer.rating) * weights.rating_scale * weights.rating_weight
}

/// Select the best offer for `part_number` from `offers`.
///
/// Offers for other parts are ignored. Ties keep the first offer encountered
/// in input order, so the result is stable for identical input orderings.
/// Returns `None` when no offer exists for the part; absent supplier data is
/// an expected business condition, not a failure.
pub fn find_best_supplier(
    part_number: &str,
    offers: &[SupplierOffer],
    weights: &RankingWeights,
) -> Option<BestSupplier> {
    let mut best: Option<(f64, &SupplierOffer)> = None;

    for offer in offers.iter().filter(|o| o.part_number == part_number) {
        let score = score_offer(offer, weights);
        match best {
            // Strict comparison: an equal score never displaces the incumbent.
            Some((best_score, _)) if score >= best_score => {}
            _ => best = Some((score, offer)),
        }
    }

    best.map(|(_, offer)| BestSupplier {
        supplier: offer.supplier_name.clone(),
        location: offer.location.clone(),
        rating: offer.rating,
        price: offer.unit_price,
        delivery_days: offer.delivery_days,
        reliability: offer.reliability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn offer(
        supplier: &str,
        part: &str,
        price: f64,
        delivery_days: i64,
        rating: f64,
    ) -> SupplierOffer {
        SupplierOffer {
            supplier_id: format!("SUP-{}", supplier),
            supplier_name: supplier.to_string(),
            location: "Cincinnati, OH".to_string(),
            part_number: part.to_string(),
            unit_price: price,
            delivery_days,
            rating,
            reliability: 0.97,
        }
    }

    #[test]
    fn test_reference_scores() {
        let weights = RankingWeights::default();
        let a = offer("A", "HPT-8472-A", 4200.0, 5, 4.8);
        let b = offer("B", "HPT-8472-A", 4000.0, 7, 4.5);

        // 4200*0.4 + 5*100*0.3 + 0.2*500*0.3 = 1680 + 150 + 30
        assert!((score_offer(&a, &weights) - 1860.0).abs() < 1e-9);
        // 4000*0.4 + 7*100*0.3 + 0.5*500*0.3 = 1600 + 210 + 75
        assert!((score_offer(&b, &weights) - 1885.0).abs() < 1e-9);
    }

    #[test]
    fn test_picks_lowest_score_not_lowest_price() {
        let weights = RankingWeights::default();
        let offers = vec![
            offer("A", "HPT-8472-A", 4200.0, 5, 4.8),
            offer("B", "HPT-8472-A", 4000.0, 7, 4.5),
        ];

        let best = find_best_supplier("HPT-8472-A", &offers, &weights).unwrap();
        assert_eq!(best.supplier, "A");
        assert_eq!(best.price, 4200.0);
        assert_eq!(best.delivery_days, 5);
    }

    #[test]
    fn test_ignores_offers_for_other_parts() {
        let weights = RankingWeights::default();
        let offers = vec![
            offer("A", "FAN-3392-B", 1.0, 1, 5.0),
            offer("B", "HPT-8472-A", 4000.0, 7, 4.5),
        ];

        let best = find_best_supplier("HPT-8472-A", &offers, &weights).unwrap();
        assert_eq!(best.supplier, "B");
    }

    #[test]
    fn test_empty_offer_set_returns_none() {
        let weights = RankingWeights::default();
        assert!(find_best_supplier("HPT-8472-A", &[], &weights).is_none());

        let offers = vec![offer("A", "FAN-3392-B", 100.0, 3, 4.9)];
        assert!(find_best_supplier("HPT-8472-A", &offers, &weights).is_none());
    }

    #[test]
    fn test_tie_keeps_first_encountered() {
        let weights = RankingWeights::default();
        let offers = vec![
            offer("First", "HPT-8472-A", 4200.0, 5, 4.8),
            offer("Second", "HPT-8472-A", 4200.0, 5, 4.8),
        ];

        let best = find_best_supplier("HPT-8472-A", &offers, &weights).unwrap();
        assert_eq!(best.supplier, "First");
    }

    proptest! {
        #[test]
        fn prop_score_is_strictly_increasing_in_price(
            price in 0.0f64..100_000.0,
            bump in 0.01f64..10_000.0,
            delivery_days in 0i64..30,
            rating in 0.0f64..5.0,
        ) {
            let weights = RankingWeights::default();
            let cheap = offer("A", "P", price, delivery_days, rating);
            let pricey = offer("B", "P", price + bump, delivery_days, rating);

            prop_assert!(score_offer(&pricey, &weights) > score_offer(&cheap, &weights));
        }

        #[test]
        fn prop_raising_price_never_wins_argmin(
            price in 0.0f64..100_000.0,
            bump in 0.01f64..10_000.0,
            delivery_days in 0i64..30,
            rating in 0.0f64..5.0,
        ) {
            let weights = RankingWeights::default();
            let offers = vec![
                offer("Cheap", "P", price, delivery_days, rating),
                offer("Pricey", "P", price + bump, delivery_days, rating),
            ];

            let best = find_best_supplier("P", &offers, &weights).unwrap();
            prop_assert_eq!(best.supplier, "Cheap");
        }
    }
}
