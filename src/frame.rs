//! Status frame composition for the OLED.
//!
//! The frame is a fixed layout: an outer border, a horizontal divider, the
//! current state label in the top half and the two converted sensor values in
//! the bottom half. Rendering goes through any [`DrawTarget`] so composition
//! is testable without display hardware; the display task pushes the finished
//! buffer to the panel in one full-frame update.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::String;

use crate::reading::Reading;
use crate::risk::{RiskState, classify};
use crate::units::{adc_to_rain_volume, adc_to_water_level};

/// Literal state label shown on the display.
pub const fn state_label(risk: RiskState) -> &'static str {
    match risk {
        RiskState::Alert => "Alerta",
        RiskState::Normal => "Normal",
    }
}

/// Water level line, one decimal, meters.
pub fn water_line(level_m: f32) -> String<20> {
    let mut line = String::new();
    let _ = write!(line, "Agua: {level_m:.1} m");
    line
}

/// Rain volume line, one decimal, cubic meters.
pub fn rain_line(volume_m3: f32) -> String<20> {
    let mut line = String::new();
    let _ = write!(line, "Chuva: {volume_m3:.1} m3");
    line
}

/// Compose the full status frame for one reading.
///
/// The caller is expected to clear its buffer first and flush afterwards, so
/// the physical update is a single atomic frame.
pub fn draw_status_frame<D>(target: &mut D, reading: &Reading) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    let text_style = MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build();

    // Outer border and divider between state and values
    Rectangle::new(Point::new(3, 3), Size::new(122, 58))
        .into_styled(stroke)
        .draw(target)?;
    Line::new(Point::new(3, 32), Point::new(125, 32))
        .into_styled(stroke)
        .draw(target)?;

    let risk = classify(reading);
    Text::with_baseline("ESTADO:", Point::new(35, 10), text_style, Baseline::Top).draw(target)?;
    Text::with_baseline(state_label(risk), Point::new(35, 22), text_style, Baseline::Top).draw(target)?;

    let water = water_line(adc_to_water_level(reading.water_level));
    Text::with_baseline(&water, Point::new(10, 38), text_style, Baseline::Top).draw(target)?;

    let rain = rain_line(adc_to_rain_volume(reading.rain_volume));
    Text::with_baseline(&rain, Point::new(10, 48), text_style, Baseline::Top).draw(target)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_labels() {
        assert_eq!(state_label(RiskState::Alert), "Alerta");
        assert_eq!(state_label(RiskState::Normal), "Normal");
    }

    #[test]
    fn test_value_lines_use_one_decimal() {
        assert_eq!(water_line(12.34).as_str(), "Agua: 12.3 m");
        assert_eq!(water_line(0.0).as_str(), "Agua: 0.0 m");
        assert_eq!(rain_line(20.0).as_str(), "Chuva: 20.0 m3");
        assert_eq!(rain_line(0.0).as_str(), "Chuva: 0.0 m3");
    }

    #[test]
    fn test_value_lines_fit_the_display_width() {
        // 21 glyphs of the 6 px font fit on the 128 px panel.
        assert!(water_line(50.0).len() <= 21);
        assert!(rain_line(20.0).len() <= 21);
    }
}
