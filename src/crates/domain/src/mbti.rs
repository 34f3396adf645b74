use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MbtiError {
    #[error("unknown MBTI type: {0}")]
    UnknownType(String),
}

/// 16 种 MBTI 人格类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MbtiType {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl MbtiType {
    pub const ALL: [MbtiType; 16] = [
        MbtiType::Intj,
        MbtiType::Intp,
        MbtiType::Entj,
        MbtiType::Entp,
        MbtiType::Infj,
        MbtiType::Infp,
        MbtiType::Enfj,
        MbtiType::Enfp,
        MbtiType::Istj,
        MbtiType::Isfj,
        MbtiType::Estj,
        MbtiType::Esfj,
        MbtiType::Istp,
        MbtiType::Isfp,
        MbtiType::Estp,
        MbtiType::Esfp,
    ];

    /// 每种人格类型偏好的葡萄品种，推荐查询用它过滤酒款
    pub fn grape_preferences(&self) -> &'static [&'static str] {
        match self {
            MbtiType::Intj => &["Cabernet Sauvignon", "Nebbiolo"],
            MbtiType::Intp => &["Riesling", "Chardonnay"],
            MbtiType::Entj => &["Cabernet Sauvignon", "Syrah"],
            MbtiType::Entp => &["Zinfandel", "Sauvignon Blanc"],
            MbtiType::Infj => &["Pinot Noir", "Viognier"],
            MbtiType::Infp => &["Gamay", "Chenin Blanc"],
            MbtiType::Enfj => &["Merlot", "Chardonnay"],
            MbtiType::Enfp => &["Grenache", "Gewurztraminer"],
            MbtiType::Istj => &["Merlot", "Cabernet Franc"],
            MbtiType::Isfj => &["Pinot Grigio", "Merlot"],
            MbtiType::Estj => &["Malbec", "Cabernet Sauvignon"],
            MbtiType::Esfj => &["Pinot Grigio", "Chardonnay"],
            MbtiType::Istp => &["Tempranillo", "Syrah"],
            MbtiType::Isfp => &["Pinot Noir", "Riesling"],
            MbtiType::Estp => &["Shiraz", "Zinfandel"],
            MbtiType::Esfp => &["Muscat", "Gamay"],
        }
    }
}

impl Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MbtiType::Intj => "INTJ",
            MbtiType::Intp => "INTP",
            MbtiType::Entj => "ENTJ",
            MbtiType::Entp => "ENTP",
            MbtiType::Infj => "INFJ",
            MbtiType::Infp => "INFP",
            MbtiType::Enfj => "ENFJ",
            MbtiType::Enfp => "ENFP",
            MbtiType::Istj => "ISTJ",
            MbtiType::Isfj => "ISFJ",
            MbtiType::Estj => "ESTJ",
            MbtiType::Esfj => "ESFJ",
            MbtiType::Istp => "ISTP",
            MbtiType::Isfp => "ISFP",
            MbtiType::Estp => "ESTP",
            MbtiType::Esfp => "ESFP",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for MbtiType {
    type Err = MbtiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INTJ" => Ok(MbtiType::Intj),
            "INTP" => Ok(MbtiType::Intp),
            "ENTJ" => Ok(MbtiType::Entj),
            "ENTP" => Ok(MbtiType::Entp),
            "INFJ" => Ok(MbtiType::Infj),
            "INFP" => Ok(MbtiType::Infp),
            "ENFJ" => Ok(MbtiType::Enfj),
            "ENFP" => Ok(MbtiType::Enfp),
            "ISTJ" => Ok(MbtiType::Istj),
            "ISFJ" => Ok(MbtiType::Isfj),
            "ESTJ" => Ok(MbtiType::Estj),
            "ESFJ" => Ok(MbtiType::Esfj),
            "ISTP" => Ok(MbtiType::Istp),
            "ISFP" => Ok(MbtiType::Isfp),
            "ESTP" => Ok(MbtiType::Estp),
            "ESFP" => Ok(MbtiType::Esfp),
            other => Err(MbtiError::UnknownType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("intj".parse::<MbtiType>().unwrap(), MbtiType::Intj);
        assert_eq!("EsFp".parse::<MbtiType>().unwrap(), MbtiType::Esfp);
        assert_eq!(" enfp ".parse::<MbtiType>().unwrap(), MbtiType::Enfp);
    }

    #[test]
    fn test_parse_rejects_unknown_types() {
        assert!("ABCD".parse::<MbtiType>().is_err());
        assert!("".parse::<MbtiType>().is_err());
        assert!("INT".parse::<MbtiType>().is_err());
    }

    #[test]
    fn test_all_types_round_trip_through_display() {
        for mbti in MbtiType::ALL {
            let parsed: MbtiType = mbti.to_string().parse().unwrap();
            assert_eq!(parsed, mbti);
        }
    }

    #[test]
    fn test_every_type_has_grape_preferences() {
        for mbti in MbtiType::ALL {
            assert!(
                !mbti.grape_preferences().is_empty(),
                "{} has no preferences",
                mbti
            );
        }
    }
}
