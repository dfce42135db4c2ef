/// Mapping of modules in src to type of computation
/// and whether deterministic or stochastic
pub const KATAS_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Brackets
    ("brackets/balance.rs", "Stack scan", "Deterministic"),
    // Control flow
    ("control_flow/fizz_buzz.rs", "Branching", "Deterministic"),
    ("control_flow/factorial.rs", "Looping", "Deterministic"),
    ("control_flow/sum_between.rs", "Looping", "Deterministic"),
    // Data structures
    (
        "data_structures/stack.rs",
        "Data structure operations",
        "Deterministic",
    ),
    // Games
    ("games/tic_tac_toe.rs", "Position evaluation", "Deterministic"),
    // Geometry
    ("geometry/circle.rs", "Geometric predicate", "Deterministic"),
    ("geometry/rectangle.rs", "Geometric predicate", "Deterministic"),
    ("geometry/triangle.rs", "Geometric predicate", "Deterministic"),
    // Numerical
    ("numerical/digital_root.rs", "Digit computation", "Deterministic"),
    ("numerical/luhn.rs", "Checksum", "Deterministic"),
    (
        "numerical/matrix_multiplication.rs",
        "Linear algebra",
        "Deterministic",
    ),
    ("numerical/radix.rs", "Digit computation", "Deterministic"),
    (
        "numerical/reverse_integer.rs",
        "Digit computation",
        "Deterministic",
    ),
    // String algorithms
    (
        "string_algorithms/common_path.rs",
        "Prefix scan",
        "Deterministic",
    ),
    (
        "string_algorithms/interval.rs",
        "String formatting",
        "Deterministic",
    ),
    (
        "string_algorithms/reverse.rs",
        "String transformation",
        "Deterministic",
    ),
    (
        "string_algorithms/single_char.rs",
        "Frequency scan",
        "Deterministic",
    ),
];
