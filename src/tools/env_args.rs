#[cfg(not(test))]
use std::env;
#[cfg(test)]
use std::cell::RefCell;

/// Retrieve the value associated to a `--name=value` arg passed to the app.
///
/// /!\ As this works on global variables,
/// a function using `retrieve_arg_value` could be tricky to test.
/// To do so, wrap your test with `with_env_args(args, fn)`.
/// This function is only available in a test context.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find(|arg| arg.starts_with(&arg_prefix))
        .and_then(|arg| arg.split_once("=").map(|(_, value)| value.to_owned()))
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// A mutable `Vec<String>` to host env args for tests.
    /// When a test is run with `with_env_args`,
    /// the inner `Vec` is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}
#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.clone().into_inner())
}

#[cfg(test)]
/// When running tests, env args are extended from within the app.
/// You can set them up from there by wrapping your test with this function.
pub fn with_env_args<F, T>(mut args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let global_env_args = std::env::args().collect::<Vec<String>>();
        args.extend_from_slice(&global_env_args);
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
pub mod tests {
    use parameterized::{ide, parameterized};

    use crate::tools::env_args::{retrieve_arg_value, with_env_args};

    ide!();

    #[parameterized(
        args = {vec!["--gym-host=http://localhost:9000".to_owned()], vec!["--port=8001".to_owned()], vec!["--another-arg=wrong".to_owned()], vec![]},
        arg_name = {"--gym-host", "--port", "--port", "--port"},
        expected_result = {Some("http://localhost:9000".to_owned()), Some("8001".to_owned()), None, None}
    )]
    fn should_retrieve_arg_value(
        args: Vec<String>,
        arg_name: &str,
        expected_result: Option<String>,
    ) {
        let result = with_env_args(args, || retrieve_arg_value(arg_name));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_retrieve_nothing_when_arg_has_no_value() {
        let result = with_env_args(vec!["--port".to_owned()], || retrieve_arg_value("--port"));
        assert_eq!(None, result);
    }
}
