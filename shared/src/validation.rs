//! Input validation functions
//!
//! Range checks applied at the API boundary, before profile data reaches
//! the macro pipeline or the database.

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate display name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 255 {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate age in years (1-150)
pub fn validate_age_years(age: i32) -> Result<(), String> {
    if !(1..=150).contains(&age) {
        return Err("Age must be between 1 and 150 years".to_string());
    }
    Ok(())
}

/// Validate body weight in pounds (50-1000)
pub fn validate_weight_lbs(weight: i32) -> Result<(), String> {
    if !(50..=1000).contains(&weight) {
        return Err("Weight must be between 50 and 1000 lbs".to_string());
    }
    Ok(())
}

/// Validate height text (e.g. `5'10"`); the macro pipeline handles parsing,
/// this only bounds the stored representation
pub fn validate_height_text(height: &str) -> Result<(), String> {
    if height.trim().is_empty() {
        return Err("Height cannot be empty".to_string());
    }
    if height.len() > 20 {
        return Err("Height text too long".to_string());
    }
    Ok(())
}

/// Validate activity level index (0-4: Sedentary .. Very Active)
pub fn validate_activity_level_index(index: i32) -> Result<(), String> {
    if !(0..=4).contains(&index) {
        return Err("Activity level must be between 0 and 4".to_string());
    }
    Ok(())
}

/// Validate goal type index (0-3: Lean Muscle, Bulking, Fat Loss, Maintenance)
pub fn validate_goal_type_index(index: i32) -> Result<(), String> {
    if !(0..=3).contains(&index) {
        return Err("Goal type must be between 0 and 3".to_string());
    }
    Ok(())
}

/// Validate delivery method index (0-2: Push, iMessage, Widget)
pub fn validate_delivery_method_index(index: i32) -> Result<(), String> {
    if !(0..=2).contains(&index) {
        return Err("Delivery method must be between 0 and 2".to_string());
    }
    Ok(())
}

/// Validate appearance index (0-2: Light, Dark, Auto)
pub fn validate_appearance_index(index: i32) -> Result<(), String> {
    if !(0..=2).contains(&index) {
        return Err("Appearance must be between 0 and 2".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("bruin@ucla.edu", true)]
    #[case("a@b.co", true)]
    #[case("", false)]
    #[case("not-an-email", false)]
    #[case("spaces in@mail.com", false)]
    #[case("missing@tld", false)]
    fn test_validate_email(#[case] email: &str, #[case] ok: bool) {
        assert_eq!(validate_email(email).is_ok(), ok);
    }

    #[test]
    fn test_validate_password_length_bounds() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long enough pw").is_ok());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(150, true)]
    #[case(151, false)]
    fn test_validate_age_bounds(#[case] age: i32, #[case] ok: bool) {
        assert_eq!(validate_age_years(age).is_ok(), ok);
    }

    #[rstest]
    #[case(49, false)]
    #[case(50, true)]
    #[case(1000, true)]
    #[case(1001, false)]
    fn test_validate_weight_bounds(#[case] weight: i32, #[case] ok: bool) {
        assert_eq!(validate_weight_lbs(weight).is_ok(), ok);
    }

    #[test]
    fn test_validate_height_text() {
        assert!(validate_height_text("5'10\"").is_ok());
        assert!(validate_height_text("").is_err());
        assert!(validate_height_text("   ").is_err());
        assert!(validate_height_text(&"9".repeat(21)).is_err());
    }

    #[rstest]
    #[case(-1, false)]
    #[case(0, true)]
    #[case(4, true)]
    #[case(5, false)]
    fn test_validate_activity_index(#[case] index: i32, #[case] ok: bool) {
        assert_eq!(validate_activity_level_index(index).is_ok(), ok);
    }

    #[rstest]
    #[case(-1, false)]
    #[case(0, true)]
    #[case(3, true)]
    #[case(4, false)]
    fn test_validate_goal_index(#[case] index: i32, #[case] ok: bool) {
        assert_eq!(validate_goal_type_index(index).is_ok(), ok);
    }
}
