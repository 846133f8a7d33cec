/// Format string for HTML page titles.
macro_rules! title_format {
    () => {
        "Scriptura | {}"
    };
}

/// Format string for canonical page URLs.
macro_rules! url_format {
    () => {
        "https://scriptura.rs{}"
    };
}
