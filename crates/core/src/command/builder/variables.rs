//! Variable injection and the trailing test source

use crate::params::{ParameterSet, keys, option_if_present};

/// One `--variable` pair per `variable` entry, in input order, then `--variablefile`.
pub(super) fn variable_args(parameters: &ParameterSet) -> Vec<String> {
    let mut args = Vec::new();

    for value in parameters.collect_all(keys::VARIABLE) {
        args.push("--variable".to_string());
        args.push(value.to_string());
    }

    args.extend(option_if_present(
        "--variablefile",
        parameters.lookup(keys::VARIABLE_FILE),
        None,
    ));

    args
}

pub(super) fn test_source_args(parameters: &ParameterSet) -> Vec<String> {
    parameters
        .lookup(keys::TEST_SOURCE)
        .map(|source| vec![source.to_string()])
        .unwrap_or_default()
}
