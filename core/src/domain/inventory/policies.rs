use crate::domain::inventory::{entities::InventoryItem, value_objects::ReorderStatus};

/// Classify an item as low or sufficiently stocked and, if low, recommend
/// an order quantity.
///
/// Low means `available < reorder_point`. The recommendation refills to par
/// (`par_level - available`) or the preferred reorder quantity, whichever
/// is larger; with neither configured it falls back to
/// `reorder_point - available` so a low item never shows a recommendation
/// of zero. Whole units only.
pub fn reorder_status(item: &InventoryItem) -> ReorderStatus {
    let available = item.available();

    if available >= item.reorder_point {
        return ReorderStatus {
            is_low: false,
            recommended_qty: 0,
        };
    }

    let needed_to_par = if item.par_level > 0 {
        (item.par_level - available).max(0)
    } else {
        0
    };

    let recommended_qty = if item.preferred_reorder_qty > 0 || needed_to_par > 0 {
        item.preferred_reorder_qty.max(needed_to_par)
    } else {
        (item.reorder_point - available).max(0)
    };

    ReorderStatus {
        is_low: true,
        recommended_qty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(
        on_hand: i64,
        reserved: i64,
        reorder_point: i64,
        par_level: i64,
        preferred_reorder_qty: i64,
    ) -> InventoryItem {
        InventoryItem {
            ingredient_id: "espresso_beans".to_string(),
            on_hand,
            reserved,
            reorder_point,
            par_level,
            preferred_reorder_qty,
            ..Default::default()
        }
    }

    #[test]
    fn low_item_refills_to_par() {
        let status = reorder_status(&item(5, 0, 10, 20, 0));
        assert!(status.is_low);
        assert_eq!(status.recommended_qty, 15);
    }

    #[test]
    fn stocked_item_recommends_nothing() {
        let status = reorder_status(&item(50, 0, 10, 20, 0));
        assert!(!status.is_low);
        assert_eq!(status.recommended_qty, 0);
    }

    #[test]
    fn preferred_quantity_wins_when_larger_than_par_refill() {
        let status = reorder_status(&item(5, 0, 10, 20, 40));
        assert!(status.is_low);
        assert_eq!(status.recommended_qty, 40);
    }

    #[test]
    fn fallback_uses_reorder_point_gap() {
        let status = reorder_status(&item(3, 0, 10, 0, 0));
        assert!(status.is_low);
        assert_eq!(status.recommended_qty, 7);
    }

    #[test]
    fn available_is_recomputed_and_never_negative() {
        let status = reorder_status(&item(2, 8, 10, 0, 0));
        assert!(status.is_low);
        // available clamps to 0, so the fallback gap is the full reorder point
        assert_eq!(status.recommended_qty, 10);
    }

    #[test]
    fn stored_available_is_preferred_when_present() {
        let mut stale = item(100, 0, 10, 0, 0);
        stale.available = Some(4);

        let status = reorder_status(&stale);
        assert!(status.is_low);
        assert_eq!(status.recommended_qty, 6);
    }
}
