use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::delivery_slot::selector::SlotOffer;

#[derive(Debug, Clone, Object)]
pub struct DeliverySlotResponse {
    pub date: NaiveDate,
    pub capacity_total: u32,
    pub capacity_used: u32,
    pub remaining: u32,
    /// Booked share of the day, rounded to whole percent
    pub fill_percent: u32,
    /// False once the day is fully booked
    pub is_selectable: bool,
    /// Advisory: plenty of capacity left
    pub recommended: bool,
}

impl From<SlotOffer> for DeliverySlotResponse {
    fn from(offer: SlotOffer) -> Self {
        let slot = offer.slot;
        Self {
            date: slot.date,
            capacity_total: slot.capacity_total(),
            capacity_used: slot.capacity_used(),
            remaining: slot.remaining(),
            fill_percent: slot.fill_percent(),
            is_selectable: slot.is_selectable(),
            recommended: offer.recommended,
        }
    }
}
