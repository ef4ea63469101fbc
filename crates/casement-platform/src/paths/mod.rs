mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, config_file, data_dir, window_state_dir};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_casement() {
        let path = config_dir().unwrap();
        assert!(
            path.ends_with("casement"),
            "config_dir should end with 'casement', got: {path:?}"
        );
    }

    #[test]
    fn data_dir_ends_with_casement() {
        let path = data_dir().unwrap();
        assert!(
            path.ends_with("casement"),
            "data_dir should end with 'casement', got: {path:?}"
        );
    }

    #[test]
    fn config_file_has_correct_name() {
        let path = config_file().unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "config.toml");
        assert!(
            path.parent().unwrap().ends_with("casement"),
            "config_file parent should end with 'casement', got: {path:?}"
        );
    }

    #[test]
    fn window_state_dir_is_inside_data_dir() {
        let state = window_state_dir().unwrap();
        let data = data_dir().unwrap();
        assert!(
            state.starts_with(&data),
            "window_state_dir should be inside data_dir: state={state:?}, data={data:?}"
        );
        assert_eq!(
            state.file_name().unwrap().to_str().unwrap(),
            "window-state"
        );
    }
}
