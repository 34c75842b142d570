use rat_datepicker::datepicker::DatePickerStyle;
use rat_popup::PopupStyle;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

#[derive(Debug, Default, Clone)]
pub struct Scheme {
    pub white: [Color; 4],
    pub black: [Color; 4],
    pub gray: [Color; 4],

    pub red: [Color; 4],
    pub yellow: [Color; 4],
    pub limegreen: [Color; 4],
    pub blue: [Color; 4],
    pub purple: [Color; 4],

    pub primary: [Color; 4],
    pub secondary: [Color; 4],
}

impl Scheme {
    /// Focus style
    pub fn focus(&self) -> Style {
        self.style(self.primary[2])
    }

    /// Selection style
    pub fn select(&self) -> Style {
        self.style(self.secondary[1])
    }

    /// Text field style.
    pub fn text_input(&self) -> Style {
        self.style(self.gray[3])
    }

    pub fn dialog_base(&self) -> Style {
        Style::default().fg(self.white[2]).bg(self.gray[1])
    }

    pub fn status_base(&self) -> Style {
        Style::default().fg(self.white[0]).bg(self.black[2])
    }

    pub fn status_timing(&self) -> Style {
        Style::default()
            .fg(self.text_color(self.blue[2]))
            .bg(self.blue[2])
    }

    /// Complete DatePickerStyle.
    pub fn datepicker_style(&self) -> DatePickerStyle {
        DatePickerStyle {
            style: self.text_input(),
            title: Some(Style::new().fg(self.limegreen[2])),
            weekday: Some(Style::new().fg(self.limegreen[2])),
            select: Some(self.select()),
            preview: Some(self.style(self.secondary[0])),
            focus: Some(self.focus()),
            popup: PopupStyle {
                style: self.dialog_base(),
                block: Some(Block::bordered()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Calculate a style based on the bg color.
    pub fn style(&self, color: Color) -> Style {
        Style::new().bg(color).fg(self.text_color(color))
    }

    /// Linear interpolation between the two colors.
    pub const fn linear4(c0: u32, c1: u32) -> [Color; 4] {
        // 1/3
        const fn i1(a: u8, b: u8) -> u8 {
            if a < b {
                a + (b - a) / 3
            } else {
                a - (a - b) / 3
            }
        }
        // 2/3
        const fn i2(a: u8, b: u8) -> u8 {
            if a < b {
                b - (b - a) / 3
            } else {
                b + (a - b) / 3
            }
        }

        let r0 = (c0 >> 16) as u8;
        let g0 = (c0 >> 8) as u8;
        let b0 = c0 as u8;

        let r3 = (c1 >> 16) as u8;
        let g3 = (c1 >> 8) as u8;
        let b3 = c1 as u8;

        let r1 = i1(r0, r3);
        let g1 = i1(g0, g3);
        let b1 = i1(b0, b3);

        let r2 = i2(r0, r3);
        let g2 = i2(g0, g3);
        let b2 = i2(b0, b3);

        [
            Color::Rgb(r0, g0, b0),
            Color::Rgb(r1, g1, b1),
            Color::Rgb(r2, g2, b2),
            Color::Rgb(r3, g3, b3),
        ]
    }

    /// This gives back `white[3]` or `black[0]` for text foreground
    /// providing good contrast to the given background.
    pub fn text_color(&self, color: Color) -> Color {
        match color {
            Color::Rgb(r, g, b) => {
                // The formula used in the GIMP is Y = 0.3R + 0.59G + 0.11B;
                let grey = r as f32 * 0.3f32 + g as f32 * 0.59f32 + b as f32 * 0.11f32;
                if grey >= 105f32 {
                    self.black[0]
                } else {
                    self.white[3]
                }
            }
            _ => self.white[3],
        }
    }
}

/// Imperial scheme.
///
/// Uses purple and gold for primary/secondary.
/// Other colors are bright, strong and slightly smudged.
///
pub const THEME: Scheme = Scheme {
    primary: Scheme::linear4(0x300057, 0x8c00fd),
    secondary: Scheme::linear4(0x574b00, 0xffde00),

    white: Scheme::linear4(0xdedfe3, 0xf6f6f3),
    black: Scheme::linear4(0x0f1014, 0x2a2b37),
    gray: Scheme::linear4(0x3b3d4e, 0x6e7291),

    red: Scheme::linear4(0x480f0f, 0xd22d2d),
    yellow: Scheme::linear4(0x756600, 0xffde00),
    limegreen: Scheme::linear4(0x2c4611, 0x80ce31),
    blue: Scheme::linear4(0x162b41, 0x2b81d4),
    purple: Scheme::linear4(0x4d008b, 0x8c00fd),
};
