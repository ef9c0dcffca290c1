use pam_client::utils::config::{
    get_env_flag, get_env_or_default, get_env_or_none, get_env_string_or,
};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("PAM_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("PAM_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("PAM_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("PAM_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("PAM_TEST_VAR_INVALID", 10);
        assert_eq!(result, 10);
        env::remove_var("PAM_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    unsafe {
        env::remove_var("PAM_MISSING_VAR_OPTION");
        let result: Option<i32> = get_env_or_none("PAM_MISSING_VAR_OPTION");
        assert_eq!(result, None);
    }
}

#[test]
fn test_get_env_flag_is_case_insensitive() {
    unsafe {
        env::set_var("PAM_TEST_FLAG_UPPER", "TRUE");
        env::set_var("PAM_TEST_FLAG_PADDED", " true ");
        env::set_var("PAM_TEST_FLAG_OTHER", "1");
        assert!(get_env_flag("PAM_TEST_FLAG_UPPER"));
        assert!(get_env_flag("PAM_TEST_FLAG_PADDED"));
        assert!(!get_env_flag("PAM_TEST_FLAG_OTHER"));
        assert!(!get_env_flag("PAM_TEST_FLAG_UNSET"));
        env::remove_var("PAM_TEST_FLAG_UPPER");
        env::remove_var("PAM_TEST_FLAG_PADDED");
        env::remove_var("PAM_TEST_FLAG_OTHER");
    }
}

#[test]
fn test_get_env_string_or_falls_back_on_blank() {
    unsafe {
        env::set_var("PAM_TEST_BLANK", "   ");
        env::set_var("PAM_TEST_SET", "cms-app");
        assert_eq!(get_env_string_or("PAM_TEST_BLANK", "fallback"), "fallback");
        assert_eq!(get_env_string_or("PAM_TEST_SET", "fallback"), "cms-app");
        assert_eq!(get_env_string_or("PAM_TEST_UNSET_STRING", "fallback"), "fallback");
        env::remove_var("PAM_TEST_BLANK");
        env::remove_var("PAM_TEST_SET");
    }
}
