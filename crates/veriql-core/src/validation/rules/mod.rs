mod unique_fragment_names;

pub use unique_fragment_names::UniqueFragmentNamesRule;
