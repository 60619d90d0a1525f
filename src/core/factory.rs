use crate::domain::model::ParameterDefinition;

/// Creates a definition with no name, not required, and no description.
///
/// See [`create_parameter_definition_with_name`].
pub fn create_parameter_definition(key: &str, datatype: &str) -> ParameterDefinition {
    create_parameter_definition_with_name(key, datatype, None)
}

/// See [`create_parameter_definition_with_required`].
pub fn create_parameter_definition_with_name(
    key: &str,
    datatype: &str,
    name: Option<&str>,
) -> ParameterDefinition {
    create_parameter_definition_with_required(key, datatype, name, false)
}

/// See [`create_parameter_definition_with_description`].
pub fn create_parameter_definition_with_required(
    key: &str,
    datatype: &str,
    name: Option<&str>,
    required: bool,
) -> ParameterDefinition {
    create_parameter_definition_with_description(key, datatype, name, required, None)
}

/// Creates a [`ParameterDefinition`] with every field set from the arguments.
///
/// `key` and `datatype` are taken as given; empty values are the caller's
/// concern and are left for the evaluating engine to reject.
pub fn create_parameter_definition_with_description(
    key: &str,
    datatype: &str,
    name: Option<&str>,
    required: bool,
    description: Option<&str>,
) -> ParameterDefinition {
    build_parameter_definition(
        key.to_string(),
        datatype.to_string(),
        name.map(str::to_string),
        required,
        description.map(str::to_string),
    )
}

/// Full form over owned values, for callers that already hold `String`s.
pub(crate) fn build_parameter_definition(
    key: String,
    datatype: String,
    name: Option<String>,
    required: bool,
    description: Option<String>,
) -> ParameterDefinition {
    tracing::debug!("Creating parameter with key: {}", key);

    ParameterDefinition::new(key, name, datatype, required, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let value = tracing::subscriber::with_default(subscriber, f);
        (value, log.contents())
    }

    #[test]
    fn test_creation_is_logged_at_debug() {
        let (pd, output) = capture(|| create_parameter_definition("age", "java.lang.Integer"));

        assert_eq!(pd.key(), "age");
        assert!(output.contains("DEBUG"), "missing level in: {}", output);
        assert!(
            output.contains("Creating parameter with key: age"),
            "missing key in: {}",
            output
        );
    }

    #[test]
    fn test_each_form_logs_once() {
        let (_, output) = capture(|| {
            create_parameter_definition_with_name("a", "java.lang.Long", Some("A"));
            create_parameter_definition_with_required("b", "java.lang.Long", None, true);
            create_parameter_definition_with_description("c", "java.lang.Long", None, false, None);
        });

        assert_eq!(output.matches("Creating parameter with key:").count(), 3);
        for key in ["key: a", "key: b", "key: c"] {
            assert!(output.contains(key), "missing {} in: {}", key, output);
        }
    }

    #[test]
    fn test_two_arg_defaults() {
        let pd = create_parameter_definition("age", "java.lang.Integer");
        assert_eq!(pd.key(), "age");
        assert_eq!(pd.datatype(), "java.lang.Integer");
        assert_eq!(pd.name(), None);
        assert!(!pd.is_required());
        assert_eq!(pd.description(), None);
    }

    #[test]
    fn test_default_chain() {
        let full = |name, required, description| {
            create_parameter_definition_with_description(
                "weight",
                "java.lang.Double",
                name,
                required,
                description,
            )
        };

        assert_eq!(
            create_parameter_definition("weight", "java.lang.Double"),
            full(None, false, None)
        );
        assert_eq!(
            create_parameter_definition_with_name("weight", "java.lang.Double", Some("Weight")),
            full(Some("Weight"), false, None)
        );
        assert_eq!(
            create_parameter_definition_with_required(
                "weight",
                "java.lang.Double",
                Some("Weight"),
                true
            ),
            full(Some("Weight"), true, None)
        );
    }

    #[test]
    fn test_full_form_sets_all_fields() {
        let pd = create_parameter_definition_with_description(
            "age",
            "java.lang.Integer",
            Some("Age"),
            true,
            Some("Patient age in years"),
        );
        assert_eq!(pd.key(), "age");
        assert_eq!(pd.datatype(), "java.lang.Integer");
        assert_eq!(pd.name(), Some("Age"));
        assert!(pd.is_required());
        assert_eq!(pd.description(), Some("Patient age in years"));
    }

    #[test]
    fn test_empty_key_is_accepted() {
        let pd = create_parameter_definition("", "");
        assert_eq!(pd.key(), "");
        assert_eq!(pd.datatype(), "");
    }

    #[test]
    fn test_each_call_returns_fresh_value() {
        let a = create_parameter_definition("age", "java.lang.Integer");
        let b = create_parameter_definition("age", "java.lang.Integer");
        assert_eq!(a, b);
        assert!(!std::ptr::eq(a.key(), b.key()));
    }
}
