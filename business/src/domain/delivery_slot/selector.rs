use chrono::NaiveDate;

use super::errors::DeliverySlotError;
use super::model::{DEFAULT_RECOMMENDED_PERCENT, DeliverySlot};

/// A slot as offered to the partner, with its advisory flag resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOffer {
    pub slot: DeliverySlot,
    pub recommended: bool,
}

/// Read-only view over the configured shipment slots.
///
/// Selecting a slot validates it but does not consume capacity.
#[derive(Debug, Clone)]
pub struct DeliverySlotSelector {
    slots: Vec<DeliverySlot>,
    recommended_percent: u32,
}

impl DeliverySlotSelector {
    pub fn new(slots: Vec<DeliverySlot>) -> Self {
        Self::with_threshold(slots, DEFAULT_RECOMMENDED_PERCENT)
    }

    pub fn with_threshold(slots: Vec<DeliverySlot>, recommended_percent: u32) -> Self {
        Self {
            slots,
            recommended_percent,
        }
    }

    pub fn list_slots(&self) -> Vec<SlotOffer> {
        self.slots
            .iter()
            .map(|slot| SlotOffer {
                slot: *slot,
                recommended: slot.is_recommended(self.recommended_percent),
            })
            .collect()
    }

    pub fn select(&self, date: NaiveDate) -> Result<DeliverySlot, DeliverySlotError> {
        let slot = self
            .slots
            .iter()
            .find(|s| s.date == date)
            .ok_or(DeliverySlotError::SlotNotFound)?;

        if !slot.is_selectable() {
            return Err(DeliverySlotError::SlotUnavailable);
        }
        Ok(*slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, day).unwrap()
    }

    fn selector() -> DeliverySlotSelector {
        DeliverySlotSelector::new(vec![
            DeliverySlot::new(date(25), 8, 6).unwrap(),
            DeliverySlot::new(date(26), 8, 3).unwrap(),
            DeliverySlot::new(date(27), 8, 1).unwrap(),
            DeliverySlot::new(date(28), 8, 8).unwrap(),
        ])
    }

    #[test]
    fn should_select_open_slot() {
        let slot = selector().select(date(26)).unwrap();

        assert_eq!(slot.date, date(26));
        assert_eq!(slot.remaining(), 5);
    }

    #[test]
    fn should_allow_non_recommended_slot() {
        let selector = selector();
        let offer = selector
            .list_slots()
            .into_iter()
            .find(|o| o.slot.date == date(25))
            .unwrap();

        assert!(!offer.recommended);
        assert!(selector.select(date(25)).is_ok());
    }

    #[test]
    fn should_fail_with_unavailable_for_full_slot() {
        assert_eq!(
            selector().select(date(28)),
            Err(DeliverySlotError::SlotUnavailable)
        );
    }

    #[test]
    fn should_fail_with_not_found_for_unknown_date() {
        assert_eq!(
            selector().select(date(29)),
            Err(DeliverySlotError::SlotNotFound)
        );
    }

    #[test]
    fn should_not_consume_capacity_when_selecting() {
        let selector = selector();
        selector.select(date(27)).unwrap();

        assert_eq!(selector.select(date(27)).unwrap().capacity_used(), 1);
    }

    #[test]
    fn should_flag_recommended_slots_in_listing() {
        let recommended: Vec<NaiveDate> = selector()
            .list_slots()
            .into_iter()
            .filter(|o| o.recommended)
            .map(|o| o.slot.date)
            .collect();

        assert_eq!(recommended, vec![date(26), date(27)]);
    }

    #[test]
    fn should_honor_custom_threshold() {
        let strict = DeliverySlotSelector::with_threshold(
            vec![DeliverySlot::new(date(26), 8, 3).unwrap()],
            75,
        );

        assert!(!strict.list_slots()[0].recommended);
    }
}
