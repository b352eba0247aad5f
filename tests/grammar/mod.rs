mod tests_grammar_set;
