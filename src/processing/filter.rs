//! License filtering.
//!
//! The constructors here return closures usable both with [`filter()`] and as the predicate of
//! [`crate::ingestion::read_dataset_with`].

use chrono::NaiveDate;

use crate::types::LiquorLicense;

/// Returns the licenses for which `predicate` returns `true`, in their original order.
pub fn filter<F>(licenses: &[LiquorLicense], mut predicate: F) -> Vec<LiquorLicense>
where
    F: FnMut(&LiquorLicense) -> bool,
{
    licenses
        .iter()
        .filter(|lic| predicate(lic))
        .cloned()
        .collect()
}

/// Premises county equals `county` exactly.
pub fn in_county(county: impl Into<String>) -> impl Fn(&LiquorLicense) -> bool {
    let county = county.into();
    move |lic| lic.premises_county == county
}

/// City equals `city`, ignoring ASCII case (the extract upper-cases most cities).
pub fn in_city(city: impl Into<String>) -> impl Fn(&LiquorLicense) -> bool {
    let city = city.into();
    move |lic| lic.city.eq_ignore_ascii_case(&city)
}

/// Description contains `needle`, case-insensitively.
pub fn with_description_containing(needle: &str) -> impl Fn(&LiquorLicense) -> bool {
    let needle = needle.to_lowercase();
    move |lic| lic.description.to_lowercase().contains(&needle)
}

pub fn has_georeference(lic: &LiquorLicense) -> bool {
    lic.georeference.is_some()
}

/// Expiration date is known and not before `date`.
pub fn expires_on_or_after(date: NaiveDate) -> impl Fn(&LiquorLicense) -> bool {
    move |lic| lic.expiration_date.is_some_and(|exp| exp >= date)
}
