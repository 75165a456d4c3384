use core::fmt;

pub enum CustomDbErr {
    NotFound,
    Duplicate,
}

impl fmt::Display for CustomDbErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomDbErr::NotFound => write!(f, "NotFound"),
            CustomDbErr::Duplicate => write!(f, "Duplicate"),
        }
    }
}

impl std::str::FromStr for CustomDbErr {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NotFound" => Ok(CustomDbErr::NotFound),
            "Duplicate" => Ok(CustomDbErr::Duplicate),
            _ => Err("Unimplemented CustomDbErr"),
        }
    }
}
