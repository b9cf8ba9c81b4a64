/// Icon category for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Clear,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Cloudy,
    LightRain,
    ModerateRain,
    HeavyRain,
    Storm,
    LightSnow,
    ModerateSnow,
    HeavySnow,
}

impl IconKind {
    /// Classify a WMO weather code into an icon category.
    ///
    /// Total function: any unrecognized code falls back to `Cloudy`.
    /// Code 73 matches both the moderate rain and moderate snow rules;
    /// rules are checked in order and the first match wins, so 73
    /// classifies as `ModerateRain`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => IconKind::Clear,
            1 => IconKind::MainlyClear,
            2 => IconKind::PartlyCloudy,
            3 => IconKind::Overcast,
            45 | 48 => IconKind::Cloudy,
            51 | 56 | 61 | 66 => IconKind::LightRain,
            53 | 63 | 73 => IconKind::ModerateRain,
            55 | 57 | 65 | 67 => IconKind::HeavyRain,
            95 | 96 | 99 => IconKind::Storm,
            71 | 77 | 80 | 85 => IconKind::LightSnow,
            81 => IconKind::ModerateSnow,
            75 | 82 | 86 => IconKind::HeavySnow,
            _ => IconKind::Cloudy,
        }
    }

    /// Icon image file served under `images/` in the public directory.
    pub fn file_name(self) -> &'static str {
        match self {
            IconKind::Clear => "clear.png",
            IconKind::MainlyClear => "mainly_clear.png",
            IconKind::PartlyCloudy => "partly_cloudy.png",
            IconKind::Overcast => "overcast.png",
            IconKind::Cloudy => "cloudy.png",
            IconKind::LightRain => "light_rain.png",
            IconKind::ModerateRain => "moderate_rain.png",
            IconKind::HeavyRain => "heavy_rain.png",
            IconKind::Storm => "storm.png",
            IconKind::LightSnow => "light_snow.png",
            IconKind::ModerateSnow => "moderate_snow.png",
            IconKind::HeavySnow => "heavy_snow.png",
        }
    }
}
