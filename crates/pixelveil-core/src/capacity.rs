use crate::envelope::Envelope;
use crate::error::VeilError;
use crate::result::Result;

/// Color channels per pixel that carry data; carriers have no alpha channel.
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Outcome of a successful capacity check: the framed envelope, ready to be
/// written without recomputation.
#[derive(Debug)]
pub struct CapacityPlan {
    envelope: Envelope,
}

impl CapacityPlan {
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn required_slots(&self) -> usize {
        self.envelope.required_slots()
    }
}

/// Byte-slots a carrier of the given `(width, height)` offers.
pub fn available_slots((width, height): (u32, u32)) -> usize {
    width as usize * height as usize * CHANNELS_PER_PIXEL
}

/// Decides whether `message` fits a carrier of the given dimensions and
/// returns the exact bytes to write. Pure function of its inputs; rejects
/// before any carrier mutation can happen.
pub fn plan(message: &str, dimensions: (u32, u32)) -> Result<CapacityPlan> {
    let envelope = Envelope::for_message(message)?;
    let required = envelope.required_slots();
    let available = available_slots(dimensions);
    if required > available {
        return Err(VeilError::ImageTooSmall {
            required,
            available,
        });
    }

    Ok(CapacityPlan { envelope })
}

#[cfg(test)]
mod capacity_tests {
    use super::*;

    #[test]
    fn should_count_three_slots_per_pixel() {
        assert_eq!(available_slots((10, 10)), 300);
        assert_eq!(available_slots((1, 1)), 3);
        assert_eq!(available_slots((0, 7)), 0);
    }

    #[test]
    fn should_plan_length_field_plus_one_slot_per_character() {
        let plan = plan("Hi", (10, 10)).unwrap();

        assert_eq!(plan.required_slots(), 5);
        assert_eq!(plan.envelope().as_bytes(), b"002Hi");
    }

    #[test]
    fn should_accept_an_exactly_filling_message() {
        // 2x1 carrier: 6 slots, 3 for the length field and 3 for payload
        let plan = plan("abc", (2, 1)).unwrap();

        assert_eq!(plan.required_slots(), available_slots((2, 1)));
    }

    #[test]
    fn should_reject_a_message_one_slot_too_big() {
        match plan("abcd", (2, 1)).err() {
            Some(VeilError::ImageTooSmall {
                required,
                available,
            }) => {
                assert_eq!(required, 7);
                assert_eq!(available, 6);
            }
            _ => panic!("expected ImageTooSmall"),
        }
    }

    #[test]
    fn should_reject_an_overlong_message_before_looking_at_the_carrier() {
        let message = "x".repeat(1000);
        assert!(matches!(
            plan(&message, (1000, 1000)).err(),
            Some(VeilError::MessageTooLong { length: 1000 })
        ));
    }
}
