//! Localised strings for the site.
//!
//! The site ships in Arabic (the default, rendered right-to-left) and English.
//! Every user-facing string is a [`LocalizedText`] pair resolved against the
//! active [`Locale`].

/// Supported page languages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Arabic,
    English,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Arabic => "ar",
            Locale::English => "en",
        }
    }

    /// Parse a language tag, falling back to Arabic for anything unknown
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Locale::English,
            _ => Locale::Arabic,
        }
    }

    /// Text direction for the `dir` attribute
    pub fn dir(&self) -> &'static str {
        match self {
            Locale::Arabic => "rtl",
            Locale::English => "ltr",
        }
    }
}

/// A string available in every supported locale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalizedText {
    pub arabic: &'static str,
    pub english: &'static str,
}

impl LocalizedText {
    pub const fn new(arabic: &'static str, english: &'static str) -> Self {
        Self { arabic, english }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Arabic => self.arabic,
            Locale::English => self.english,
        }
    }
}

pub const REQUIRED_FIELD: LocalizedText =
    LocalizedText::new("هذا الحقل مطلوب", "This field is required");

pub const INVALID_EMAIL: LocalizedText = LocalizedText::new(
    "يرجى إدخال بريد إلكتروني صحيح",
    "Please enter a valid email address",
);

pub const INVALID_PHONE: LocalizedText = LocalizedText::new(
    "يرجى إدخال رقم هاتف صحيح",
    "Please enter a valid phone number",
);

pub const FIX_FORM_ERRORS: LocalizedText = LocalizedText::new(
    "يرجى تصحيح الأخطاء في النموذج",
    "Please correct the errors in the form",
);

pub const SENDING: LocalizedText = LocalizedText::new("جاري الإرسال...", "Sending...");

pub const SUBMIT: LocalizedText = LocalizedText::new("إرسال", "Submit");

pub const CANCEL: LocalizedText = LocalizedText::new("إلغاء", "Cancel");

pub const CLOSE: LocalizedText = LocalizedText::new("إغلاق", "Close");

pub const SUBMIT_FAILED: LocalizedText = LocalizedText::new(
    "تعذر إرسال الطلب، يرجى المحاولة مرة أخرى",
    "Your request could not be sent, please try again",
);

pub const SELECT_PLACEHOLDER: LocalizedText = LocalizedText::new("اختر...", "Choose...");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("en"), Locale::English);
        assert_eq!(Locale::from_tag(" EN-GB "), Locale::English);
        assert_eq!(Locale::from_tag("ar"), Locale::Arabic);
        assert_eq!(Locale::from_tag("fr"), Locale::Arabic);
        assert_eq!(Locale::from_tag(""), Locale::Arabic);
    }

    #[test]
    fn test_locale_direction() {
        assert_eq!(Locale::Arabic.dir(), "rtl");
        assert_eq!(Locale::English.dir(), "ltr");
        assert_eq!(Locale::default(), Locale::Arabic);
    }

    #[test]
    fn test_localized_text_lookup() {
        assert_eq!(REQUIRED_FIELD.get(Locale::Arabic), "هذا الحقل مطلوب");
        assert_eq!(REQUIRED_FIELD.get(Locale::English), "This field is required");
    }
}
