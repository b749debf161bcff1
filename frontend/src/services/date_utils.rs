use shared::formatter::iso_date;

/// Today's local date in YYYY-MM-DD format
pub fn today() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    iso_date(year as i32, month, day)
}
