use crate::errors::AppError;
use crate::models::PackageType;

pub const ADDON_EXTRA_VIDEO: &str = "extra-video";
pub const ADDON_TRADITIONAL_PHOTOS: &str = "traditional-photos";
pub const ADDON_EXTRA_HOUR: &str = "extra-hour";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub total: i64,
    pub advance: i64,
}

pub fn base_price(package: PackageType) -> i64 {
    match package {
        PackageType::SmartShot => 999,
        PackageType::XpressPro => 1799,
        PackageType::XpressMax => 2999,
    }
}

pub fn add_on_price(add_on: &str) -> Option<i64> {
    match add_on {
        ADDON_EXTRA_VIDEO => Some(550),
        ADDON_TRADITIONAL_PHOTOS => Some(500),
        ADDON_EXTRA_HOUR => Some(400),
        _ => None,
    }
}

/// Prices a package plus add-on selection. Duplicate add-ons collapse;
/// unrecognized add-ons price at zero and are logged (kept lenient to match
/// the live site's form behavior). The advance is half the total, rounded
/// half up.
pub fn quote(package_type: &str, add_ons: &[String]) -> Result<Quote, AppError> {
    let package = PackageType::parse(package_type)
        .ok_or_else(|| AppError::InvalidPackageType(package_type.to_string()))?;

    let mut total = base_price(package);
    let mut seen: Vec<&str> = Vec::new();
    for add_on in add_ons {
        if seen.contains(&add_on.as_str()) {
            continue;
        }
        seen.push(add_on);
        match add_on_price(add_on) {
            Some(price) => total += price,
            None => tracing::warn!(add_on = %add_on, "unrecognized add-on priced at 0"),
        }
    }

    Ok(Quote {
        total,
        advance: (total + 1) / 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addons(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_base_packages() {
        assert_eq!(quote("smart-shot", &[]).unwrap().total, 999);
        assert_eq!(quote("xpress-pro", &[]).unwrap().total, 1799);
        assert_eq!(quote("xpress-max", &[]).unwrap().total, 2999);
    }

    #[test]
    fn test_addons_sum() {
        let q = quote("xpress-pro", &addons(&["extra-video", "extra-hour"])).unwrap();
        assert_eq!(q.total, 2749);
        assert_eq!(q.advance, 1375);
    }

    #[test]
    fn test_all_addons() {
        let q = quote(
            "xpress-max",
            &addons(&["extra-video", "traditional-photos", "extra-hour"]),
        )
        .unwrap();
        assert_eq!(q.total, 2999 + 550 + 500 + 400);
        assert_eq!(q.advance, (q.total + 1) / 2);
    }

    #[test]
    fn test_advance_rounds_half_up() {
        // 999 / 2 = 499.5, rounds up to 500
        assert_eq!(quote("smart-shot", &[]).unwrap().advance, 500);
        // 1799 + 550 = 2349 -> 1174.5 -> 1175
        let q = quote("xpress-pro", &addons(&["extra-video"])).unwrap();
        assert_eq!(q.advance, 1175);
    }

    #[test]
    fn test_duplicate_addons_collapse() {
        let q = quote("smart-shot", &addons(&["extra-hour", "extra-hour"])).unwrap();
        assert_eq!(q.total, 999 + 400);
    }

    #[test]
    fn test_unknown_addon_contributes_zero() {
        let q = quote("smart-shot", &addons(&["drone-footage"])).unwrap();
        assert_eq!(q.total, 999);
    }

    #[test]
    fn test_invalid_package_rejected() {
        let err = quote("mega-shot", &[]).unwrap_err();
        assert!(matches!(err, AppError::InvalidPackageType(_)));
    }
}
