//! Indian states selectable as company state or place of supply.
//!
//! Each state carries its two-digit GST state code, which is also the first
//! two characters of any GSTIN registered there.

use serde::{Deserialize, Serialize};

/// States offered by the jurisdiction selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndianState {
    AndhraPradesh,
    ArunachalPradesh,
    Assam,
    Bihar,
    Chhattisgarh,
    Delhi,
    Goa,
    Gujarat,
    Haryana,
    HimachalPradesh,
    Jharkhand,
    Karnataka,
    Kerala,
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Punjab,
    Rajasthan,
    Sikkim,
    TamilNadu,
    Telangana,
    Tripura,
    UttarPradesh,
    Uttarakhand,
    WestBengal,
}

impl IndianState {
    /// All states in alphabetical order of their display name.
    pub const ALL: [IndianState; 29] = [
        Self::AndhraPradesh,
        Self::ArunachalPradesh,
        Self::Assam,
        Self::Bihar,
        Self::Chhattisgarh,
        Self::Delhi,
        Self::Goa,
        Self::Gujarat,
        Self::Haryana,
        Self::HimachalPradesh,
        Self::Jharkhand,
        Self::Karnataka,
        Self::Kerala,
        Self::MadhyaPradesh,
        Self::Maharashtra,
        Self::Manipur,
        Self::Meghalaya,
        Self::Mizoram,
        Self::Nagaland,
        Self::Odisha,
        Self::Punjab,
        Self::Rajasthan,
        Self::Sikkim,
        Self::TamilNadu,
        Self::Telangana,
        Self::Tripura,
        Self::UttarPradesh,
        Self::Uttarakhand,
        Self::WestBengal,
    ];

    /// Display name, as used for jurisdiction matching.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AndhraPradesh => "Andhra Pradesh",
            Self::ArunachalPradesh => "Arunachal Pradesh",
            Self::Assam => "Assam",
            Self::Bihar => "Bihar",
            Self::Chhattisgarh => "Chhattisgarh",
            Self::Delhi => "Delhi",
            Self::Goa => "Goa",
            Self::Gujarat => "Gujarat",
            Self::Haryana => "Haryana",
            Self::HimachalPradesh => "Himachal Pradesh",
            Self::Jharkhand => "Jharkhand",
            Self::Karnataka => "Karnataka",
            Self::Kerala => "Kerala",
            Self::MadhyaPradesh => "Madhya Pradesh",
            Self::Maharashtra => "Maharashtra",
            Self::Manipur => "Manipur",
            Self::Meghalaya => "Meghalaya",
            Self::Mizoram => "Mizoram",
            Self::Nagaland => "Nagaland",
            Self::Odisha => "Odisha",
            Self::Punjab => "Punjab",
            Self::Rajasthan => "Rajasthan",
            Self::Sikkim => "Sikkim",
            Self::TamilNadu => "Tamil Nadu",
            Self::Telangana => "Telangana",
            Self::Tripura => "Tripura",
            Self::UttarPradesh => "Uttar Pradesh",
            Self::Uttarakhand => "Uttarakhand",
            Self::WestBengal => "West Bengal",
        }
    }

    /// Two-digit GST state code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AndhraPradesh => "37",
            Self::ArunachalPradesh => "12",
            Self::Assam => "18",
            Self::Bihar => "10",
            Self::Chhattisgarh => "22",
            Self::Delhi => "07",
            Self::Goa => "30",
            Self::Gujarat => "24",
            Self::Haryana => "06",
            Self::HimachalPradesh => "02",
            Self::Jharkhand => "20",
            Self::Karnataka => "29",
            Self::Kerala => "32",
            Self::MadhyaPradesh => "23",
            Self::Maharashtra => "27",
            Self::Manipur => "14",
            Self::Meghalaya => "17",
            Self::Mizoram => "15",
            Self::Nagaland => "13",
            Self::Odisha => "21",
            Self::Punjab => "03",
            Self::Rajasthan => "08",
            Self::Sikkim => "11",
            Self::TamilNadu => "33",
            Self::Telangana => "36",
            Self::Tripura => "16",
            Self::UttarPradesh => "09",
            Self::Uttarakhand => "05",
            Self::WestBengal => "19",
        }
    }

    /// Look up by exact display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Look up by GST state code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for IndianState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether `name` is a known state display name (case-sensitive).
pub fn is_known_state(name: &str) -> bool {
    IndianState::from_name(name).is_some()
}
