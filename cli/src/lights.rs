//! The indicator panel: one light per result bit, most-significant
//! (sign) bit on the left, followed by the overflow light.
use std::io::{self, Write};

use termcolor::{self, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{Level, event};

use alu::prelude::*;

const LIT: &str = "\u{25CF}"; // ●
const DARK: &str = "\u{25CB}"; // ○

pub fn get_colour_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

pub struct IndicatorPanel<W: WriteColor> {
    stream: W,
}

impl IndicatorPanel<StandardStream> {
    pub fn stdout() -> IndicatorPanel<StandardStream> {
        IndicatorPanel::new(StandardStream::stdout(get_colour_choice()))
    }
}

impl<W: WriteColor> IndicatorPanel<W> {
    pub fn new(stream: W) -> IndicatorPanel<W> {
        IndicatorPanel { stream }
    }

    pub fn into_inner(self) -> W {
        self.stream
    }

    fn light(&mut self, on: bool, colour: termcolor::Color) -> Result<(), io::Error> {
        let mut spec = ColorSpec::new();
        if on {
            spec.set_fg(Some(colour)).set_bold(true);
        }
        if let Err(e) = self.stream.set_color(&spec) {
            event!(Level::ERROR, "Failed to select colour {:?}: {}", spec, e);
        }
        write!(self.stream, "{} ", if on { LIT } else { DARK })
    }

    /// Light up the panel to show `value` and the overflow indicator.
    pub fn show(&mut self, value: Signed8Bit, overflow: bool) -> Result<(), io::Error> {
        // Bit numbers over the lights.
        for position in (0..alu::BITS).rev() {
            write!(self.stream, "{position} ")?;
        }
        writeln!(self.stream, " V")?;
        for bit in value.bits_msb_first() {
            self.light(bit.is_set(), termcolor::Color::Green)?;
        }
        write!(self.stream, " ")?;
        self.light(overflow, termcolor::Color::Red)?;
        self.stream.reset()?;
        writeln!(self.stream)?;
        self.stream.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::IndicatorPanel;
    use alu::prelude::*;
    use termcolor::NoColor;

    fn render(value: i8, overflow: bool) -> String {
        let mut panel = IndicatorPanel::new(NoColor::new(Vec::new()));
        panel
            .show(Signed8Bit::from(value), overflow)
            .expect("writing to a Vec should not fail");
        String::from_utf8(panel.into_inner().into_inner()).expect("output should be UTF-8")
    }

    #[test]
    fn test_lights_follow_bits() {
        assert_eq!(
            render(5, false),
            "7 6 5 4 3 2 1 0  V\n○ ○ ○ ○ ○ ● ○ ●  ○ \n"
        );
    }

    #[test]
    fn test_overflow_light() {
        assert_eq!(
            render(-128, true),
            "7 6 5 4 3 2 1 0  V\n● ○ ○ ○ ○ ○ ○ ○  ● \n"
        );
    }
}
