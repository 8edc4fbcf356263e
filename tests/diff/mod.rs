mod clamp_negative_context_to_zero;
mod exit_with_status_one_when_texts_differ;
mod fail_for_missing_file;
mod read_one_side_from_stdin;
mod show_hunks_for_modified_file;
mod show_word_changes_as_whole_lines;
