mod tests_embedding;
mod tests_properties;
