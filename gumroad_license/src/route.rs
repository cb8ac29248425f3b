use std::fmt::{Display, Formatter, Result as FmtResult};

pub const GUMROAD_API_BASE: &str = "https://api.gumroad.com";

pub enum Route<'a> {
    VerifyLicense { base: &'a str },
}

impl Display for Route<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Route::VerifyLicense { base } => write!(f, "{base}/v2/licenses/verify"),
        }
    }
}
