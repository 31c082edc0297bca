use std::borrow::Cow;

/// Record that can be shown on a filtered list page.
///
/// Field accessors take the names used in [`super::FilterConfig`]; an unknown
/// or unset field returns `None`.
pub trait FilterableRecord {
    fn id(&self) -> &str;

    fn status(&self) -> &str;

    /// Text value used by free-text search
    fn text_field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Raw date string, parsed by the filter engine
    fn date_field(&self, name: &str) -> Option<&str>;

    /// Integer yen amount
    fn amount_field(&self, name: &str) -> Option<i64>;

    /// Progress in percent
    fn progress_field(&self, _name: &str) -> Option<i64> {
        None
    }
}

impl<T: FilterableRecord + ?Sized> FilterableRecord for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn status(&self) -> &str {
        (**self).status()
    }

    fn text_field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).text_field(name)
    }

    fn date_field(&self, name: &str) -> Option<&str> {
        (**self).date_field(name)
    }

    fn amount_field(&self, name: &str) -> Option<i64> {
        (**self).amount_field(name)
    }

    fn progress_field(&self, name: &str) -> Option<i64> {
        (**self).progress_field(name)
    }
}
