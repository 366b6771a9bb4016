use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub frame: Color,
    pub selected: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl Theme {
    pub fn synthwave_dark() -> Self {
        Self {
            bg: Color::Rgb(24, 24, 26),
            fg: Color::White,
            accent: Color::Rgb(64, 160, 255),
            frame: Color::Rgb(90, 90, 100),
            selected: Color::Rgb(255, 120, 0),
            success: Color::Green,
            error: Color::Red,
            muted: Color::DarkGray,
        }
    }

    pub fn synthwave_light() -> Self {
        Self {
            bg: Color::Rgb(245, 245, 247),
            fg: Color::Rgb(20, 20, 22),
            accent: Color::Rgb(40, 120, 220),
            frame: Color::Rgb(200, 200, 210),
            selected: Color::Rgb(220, 100, 0),
            success: Color::Rgb(0, 150, 0),
            error: Color::Rgb(200, 0, 0),
            muted: Color::Rgb(120, 120, 130),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::synthwave_dark(),
            ThemeMode::Light => Self::synthwave_light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::synthwave_dark()
    }
}

impl Theme {
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.selected)
    }

    pub fn border_unfocused(&self) -> Style {
        Style::default().fg(self.frame)
    }

    pub fn text_active_bold(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_editing_bold(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn text_error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn list_cursor_style(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    pub fn base_style(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    pub fn toast_color(&self, level: crate::ui::ToastLevel) -> Color {
        match level {
            crate::ui::ToastLevel::Success => self.success,
            crate::ui::ToastLevel::Error => self.error,
            crate::ui::ToastLevel::Info => self.accent,
        }
    }
}
