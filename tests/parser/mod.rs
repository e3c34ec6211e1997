mod tests_contexts;
mod tests_properties;
mod tests_recovery;
mod tests_visitor;
