//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one independently validated input of the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Password,
    ConfirmPassword,
    Country,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Country,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Country => "Country",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter your Name",
            Self::Password => "Enter your Password",
            Self::ConfirmPassword => "Confirm your Password",
            Self::Country => "Select",
        }
    }

    /// Required fields get an asterisk next to their label
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Country)
    }

    /// Whether the value is masked on screen
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Country)
    }

    /// Position of this field in the form (0-based)
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Password => 1,
            Self::ConfirmPassword => 2,
            Self::Country => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed set of countries offered by the select field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    India,
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Germany,
    France,
    Japan,
    China,
    Brazil,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::India,
        Country::Usa,
        Country::Uk,
        Country::Germany,
        Country::France,
        Country::Japan,
        Country::China,
        Country::Brazil,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::India => "India",
            Self::Usa => "USA",
            Self::Uk => "UK",
            Self::Germany => "Germany",
            Self::France => "France",
            Self::Japan => "Japan",
            Self::China => "China",
            Self::Brazil => "Brazil",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Next option of the select, treating `None` as the leading "unselected" entry
    pub fn cycle_next(current: Option<Country>) -> Option<Country> {
        match current {
            None => Some(Self::ALL[0]),
            Some(c) => Self::ALL.get(c.position() + 1).copied(),
        }
    }

    /// Previous option of the select, wrapping from "unselected" to the last country
    pub fn cycle_prev(current: Option<Country>) -> Option<Country> {
        match current {
            None => Self::ALL.last().copied(),
            Some(c) => match c.position() {
                0 => None,
                p => Some(Self::ALL[p - 1]),
            },
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or_else(|| s.to_string())
    }
}

/// Per-field presentation state that is not part of the form values
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    /// Set once the user edits the field; errors stay hidden until then
    pub touched: bool,
    /// Show the plain text of a secret field
    pub revealed: bool,
}

impl FormField {
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            touched: false,
            revealed: false,
        }
    }

    /// Toggle the show/hide state of a secret field. No-op for other fields.
    pub fn toggle_reveal(&mut self) {
        if self.name.is_secret() {
            self.revealed = !self.revealed;
        }
    }

    /// Render a raw value the way this field displays it
    pub fn display_value(&self, raw: &str) -> String {
        if self.name.is_secret() && !self.revealed {
            "•".repeat(raw.chars().count())
        } else {
            raw.to_string()
        }
    }
}
