use ratatui::style::Color;

// Catppuccin Mocha color palette
pub struct CatppuccinTheme;

impl CatppuccinTheme {
    pub const MANTLE: Color = Color::Rgb(24, 24, 37);     // #181825

    pub const SURFACE0: Color = Color::Rgb(49, 50, 68);   // #313244

    pub const TEXT: Color = Color::Rgb(205, 214, 244);    // #cdd6f4
    pub const SUBTEXT0: Color = Color::Rgb(166, 173, 200); // #a6adc8

    pub const OVERLAY0: Color = Color::Rgb(108, 112, 134); // #6c7086

    // Accent colors
    pub const MAUVE: Color = Color::Rgb(203, 166, 247);   // #cba6f7
    pub const PEACH: Color = Color::Rgb(250, 179, 135);   // #fab387
    pub const GREEN: Color = Color::Rgb(166, 227, 161);   // #a6e3a1
    pub const BLUE: Color = Color::Rgb(137, 180, 250);    // #89b4fa
    pub const LAVENDER: Color = Color::Rgb(180, 190, 254); // #b4befe

    pub fn exponent_accent() -> Color { Self::BLUE }
    // Differences get a contrasting warm accent so the two charts read
    // apart at a glance.
    pub fn difference_accent() -> Color { Self::PEACH }
    pub fn fit_accent() -> Color { Self::GREEN }
}
