use serde::{Deserialize, Serialize};

/// The closed set of icons a service can display. Stored as text; rows
/// carrying a name outside this set render with the default instead of
/// being rejected.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ServiceIcon {
    #[default]
    Sun,
    Zap,
    Battery,
    Lightbulb,
    Settings,
    Wrench,
    Wind,
    Cpu,
    Power,
    Gauge,
}

impl ServiceIcon {
    pub const ALL: [ServiceIcon; 10] = [
        Self::Sun,
        Self::Zap,
        Self::Battery,
        Self::Lightbulb,
        Self::Settings,
        Self::Wrench,
        Self::Wind,
        Self::Cpu,
        Self::Power,
        Self::Gauge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Zap => "Zap",
            Self::Battery => "Battery",
            Self::Lightbulb => "Lightbulb",
            Self::Settings => "Settings",
            Self::Wrench => "Wrench",
            Self::Wind => "Wind",
            Self::Cpu => "Cpu",
            Self::Power => "Power",
            Self::Gauge => "Gauge",
        }
    }

    /// Inner SVG markup for a 24x24 outline icon, stroked with
    /// `currentColor` by the surrounding `<svg>` element.
    pub fn svg_paths(&self) -> &'static str {
        match self {
            Self::Sun => {
                r##"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"##
            }
            Self::Zap => {
                r##"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"##
            }
            Self::Battery => {
                r##"<rect width="16" height="10" x="2" y="7" rx="2" ry="2"/><line x1="22" x2="22" y1="11" y2="13"/>"##
            }
            Self::Lightbulb => {
                r##"<path d="M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"/><path d="M9 18h6"/><path d="M10 22h4"/>"##
            }
            Self::Settings => {
                r##"<path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/><circle cx="12" cy="12" r="3"/>"##
            }
            Self::Wrench => {
                r##"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>"##
            }
            Self::Wind => {
                r##"<path d="M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2"/><path d="M9.6 4.6A2 2 0 1 1 11 8H2"/><path d="M12.6 19.4A2 2 0 1 0 14 16H2"/>"##
            }
            Self::Cpu => {
                r##"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9"/><path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/><path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"##
            }
            Self::Power => {
                r##"<path d="M12 2v10"/><path d="M18.4 6.6a9 9 0 1 1-12.77.04"/>"##
            }
            Self::Gauge => {
                r##"<path d="m12 14 4-4"/><path d="M3.34 19a10 10 0 1 1 17.32 0"/>"##
            }
        }
    }
}

impl std::fmt::Display for ServiceIcon {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for ServiceIcon {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for ServiceIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sun" => Ok(Self::Sun),
            "Zap" => Ok(Self::Zap),
            "Battery" => Ok(Self::Battery),
            "Lightbulb" => Ok(Self::Lightbulb),
            "Settings" => Ok(Self::Settings),
            "Wrench" => Ok(Self::Wrench),
            "Wind" => Ok(Self::Wind),
            "Cpu" => Ok(Self::Cpu),
            "Power" => Ok(Self::Power),
            "Gauge" => Ok(Self::Gauge),
            _ => Err(format!("unknown service icon: {}", s)),
        }
    }
}
