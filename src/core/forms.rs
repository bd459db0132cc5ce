//! Form schemas and the submission record
//!
//! Each of the three modal forms (B2C order, B2B quote, Contact) is described
//! by a static list of [`FieldSpec`]s. The schema drives rendering, blur
//! validation, form-level validation and record construction.

use std::collections::BTreeMap;

use serde::Serialize;

use super::i18n::LocalizedText;
use super::modal::ModalId;
use super::validation::{FieldError, FieldKind, validate_field};

/// How a field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Single-line input; the HTML type follows the field kind
    Input,
    /// Numeric input
    Number,
    /// Drop-down with (value, label) options
    Select(&'static [(&'static str, LocalizedText)]),
    /// Multi-line text
    TextArea,
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// DOM id of the control
    pub id: &'static str,
    /// Key of the value in the submission record
    pub key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub control: Control,
    pub label: LocalizedText,
}

impl FieldSpec {
    /// Validate a value against this field's rules
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        validate_field(value, self.kind, self.required)
    }
}

/// Which form a record or modal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    B2c,
    B2b,
    Contact,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::B2c, FormKind::B2b, FormKind::Contact];

    /// Discriminator stored under `type` in the record
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::B2c => "b2c",
            FormKind::B2b => "b2b",
            FormKind::Contact => "contact",
        }
    }

    /// DOM id of the `<form>` element
    pub fn form_id(&self) -> &'static str {
        match self {
            FormKind::B2c => "b2cForm",
            FormKind::B2b => "b2bForm",
            FormKind::Contact => "contactForm",
        }
    }

    /// Modal hosting this form
    pub fn modal_id(&self) -> ModalId {
        match self {
            FormKind::B2c => ModalId::new("b2cModal"),
            FormKind::B2b => ModalId::new("b2bModal"),
            FormKind::Contact => ModalId::new("contactModal"),
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::B2c => B2C_FIELDS,
            FormKind::B2b => B2B_FIELDS,
            FormKind::Contact => CONTACT_FIELDS,
        }
    }

    /// Look up a field by its DOM id
    pub fn field(&self, id: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|field| field.id == id)
    }

    pub fn title(&self) -> LocalizedText {
        match self {
            FormKind::B2c => LocalizedText::new("طلب شراء للأفراد", "Order for individuals"),
            FormKind::B2b => LocalizedText::new("طلب عرض سعر للشركات", "Business quote request"),
            FormKind::Contact => LocalizedText::new("تقييم القماش التالف", "Damaged fabric assessment"),
        }
    }

    /// Banner shown once the transport acknowledges the record
    pub fn success_message(&self) -> LocalizedText {
        match self {
            FormKind::B2c => LocalizedText::new(
                "تم إرسال طلبك بنجاح! سنتواصل معك قريباً.",
                "Your order was sent successfully! We will contact you soon.",
            ),
            FormKind::B2b => LocalizedText::new(
                "تم إرسال طلب عرض السعر بنجاح! سنرسل لك العرض عبر البريد الإلكتروني.",
                "Your quote request was sent successfully! We will email you the quote.",
            ),
            FormKind::Contact => LocalizedText::new(
                "تم إرسال طلبك بنجاح! سنتواصل معك لتقييم القماش التالف.",
                "Your request was sent successfully! We will contact you to assess the damaged fabric.",
            ),
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const PRODUCTS: &[(&str, LocalizedText)] = &[
    ("recycled-cotton", LocalizedText::new("قطن معاد تدويره", "Recycled cotton")),
    ("recycled-polyester", LocalizedText::new("بوليستر معاد تدويره", "Recycled polyester")),
    ("blended-yarn", LocalizedText::new("خيوط مخلوطة", "Blended yarn")),
    ("industrial-felt", LocalizedText::new("لباد صناعي", "Industrial felt")),
];

const FABRIC_TYPES: &[(&str, LocalizedText)] = &[
    ("cotton", LocalizedText::new("قطن", "Cotton")),
    ("polyester", LocalizedText::new("بوليستر", "Polyester")),
    ("wool", LocalizedText::new("صوف", "Wool")),
    ("mixed", LocalizedText::new("مختلط", "Mixed")),
];

const NAME: LocalizedText = LocalizedText::new("الاسم الكامل", "Full name");
const PHONE: LocalizedText = LocalizedText::new("رقم الهاتف", "Phone number");
const EMAIL: LocalizedText = LocalizedText::new("البريد الإلكتروني", "Email");
const PRODUCT: LocalizedText = LocalizedText::new("المنتج", "Product");
const QUANTITY: LocalizedText = LocalizedText::new("الكمية", "Quantity");
const NOTES: LocalizedText = LocalizedText::new("ملاحظات", "Notes");

static B2C_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: "b2c-name",
        key: "name",
        kind: FieldKind::Plain,
        required: true,
        control: Control::Input,
        label: NAME,
    },
    FieldSpec {
        id: "b2c-phone",
        key: "phone",
        kind: FieldKind::Phone,
        required: true,
        control: Control::Input,
        label: PHONE,
    },
    FieldSpec {
        id: "b2c-product",
        key: "product",
        kind: FieldKind::Plain,
        required: true,
        control: Control::Select(PRODUCTS),
        label: PRODUCT,
    },
    FieldSpec {
        id: "b2c-quantity",
        key: "quantity",
        kind: FieldKind::Plain,
        required: true,
        control: Control::Number,
        label: QUANTITY,
    },
    FieldSpec {
        id: "b2c-notes",
        key: "notes",
        kind: FieldKind::Plain,
        required: false,
        control: Control::TextArea,
        label: NOTES,
    },
];

static B2B_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: "b2b-company",
        key: "company",
        kind: FieldKind::Plain,
        required: true,
        control: Control::Input,
        label: LocalizedText::new("اسم الشركة", "Company name"),
    },
    FieldSpec {
        id: "b2b-email",
        key: "email",
        kind: FieldKind::Email,
        required: true,
        control: Control::Input,
        label: EMAIL,
    },
    FieldSpec {
        id: "b2b-product",
        key: "product",
        kind: FieldKind::Plain,
        required: true,
        control: Control::Select(PRODUCTS),
        label: PRODUCT,
    },
    FieldSpec {
        id: "b2b-quantity",
        key: "quantity",
        kind: FieldKind::Plain,
        required: true,
        control: Control::Number,
        label: LocalizedText::new("الكمية (كجم)", "Quantity (kg)"),
    },
    FieldSpec {
        id: "b2b-notes",
        key: "notes",
        kind: FieldKind::Plain,
        required: false,
        control: Control::TextArea,
        label: NOTES,
    },
];

static CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: "contact-name",
        key: "name",
        kind: FieldKind::Plain,
        required: true,
        control: Control::Input,
        label: NAME,
    },
    FieldSpec {
        id: "contact-phone",
        key: "phone",
        kind: FieldKind::Phone,
        required: true,
        control: Control::Input,
        label: PHONE,
    },
    FieldSpec {
        id: "contact-email",
        key: "email",
        kind: FieldKind::Email,
        required: false,
        control: Control::Input,
        label: EMAIL,
    },
    FieldSpec {
        id: "contact-fabric-type",
        key: "fabricType",
        kind: FieldKind::Plain,
        required: true,
        control: Control::Select(FABRIC_TYPES),
        label: LocalizedText::new("نوع القماش", "Fabric type"),
    },
    FieldSpec {
        id: "contact-quantity",
        key: "quantity",
        kind: FieldKind::Plain,
        required: true,
        control: Control::Input,
        label: LocalizedText::new("الكمية التقريبية", "Approximate quantity"),
    },
    FieldSpec {
        id: "contact-condition",
        key: "condition",
        kind: FieldKind::Plain,
        required: true,
        control: Control::TextArea,
        label: LocalizedText::new("وصف حالة القماش", "Fabric condition"),
    },
];

/// Outcome of validating every field of a form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValidation {
    /// Result per validated field, in schema order
    pub fields: Vec<(&'static FieldSpec, Result<(), FieldError>)>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, result)| result.is_ok())
    }

    /// Failing fields only
    pub fn errors(&self) -> impl Iterator<Item = (&'static FieldSpec, FieldError)> + '_ {
        self.fields
            .iter()
            .filter_map(|(field, result)| result.err().map(|error| (*field, error)))
    }
}

/// Validates every field of a form.
///
/// Required fields must be filled; any non-empty email or phone value must
/// match its pattern, whether or not the field is required. An empty optional
/// field passes. There is no short circuit, so every field can be annotated.
pub fn validate_form(kind: FormKind, value_of: impl Fn(&FieldSpec) -> String) -> FormValidation {
    let fields = kind
        .fields()
        .iter()
        .map(|field| (field, field.validate(&value_of(field))))
        .collect();

    FormValidation { fields }
}

/// Flat field-name to value mapping built at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    #[serde(rename = "type")]
    pub kind: FormKind,
    #[serde(flatten)]
    pub fields: BTreeMap<&'static str, String>,
}

impl SubmissionRecord {
    /// Collect raw values of every field of the form
    pub fn collect(kind: FormKind, value_of: impl Fn(&FieldSpec) -> String) -> Self {
        let fields = kind
            .fields()
            .iter()
            .map(|field| (field.key, value_of(field)))
            .collect();

        Self { kind, fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(values: &'a HashMap<&str, &str>) -> impl Fn(&FieldSpec) -> String + 'a {
        move |field| values.get(field.id).copied().unwrap_or_default().to_string()
    }

    #[test]
    fn test_field_ids_are_unique_and_prefixed() {
        for kind in FormKind::ALL {
            let mut seen = std::collections::HashSet::new();
            for field in kind.fields() {
                assert!(seen.insert(field.id), "duplicate id {}", field.id);
                assert!(field.id.starts_with(kind.as_str()), "{} not prefixed", field.id);
            }
        }
    }

    #[test]
    fn test_record_keys() {
        let keys: Vec<_> = FormKind::Contact.fields().iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec!["name", "phone", "email", "fabricType", "quantity", "condition"]
        );

        let keys: Vec<_> = FormKind::B2b.fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["company", "email", "product", "quantity", "notes"]);
    }

    #[test]
    fn test_modal_and_form_ids() {
        assert_eq!(FormKind::B2c.modal_id().as_str(), "b2cModal");
        assert_eq!(FormKind::B2b.form_id(), "b2bForm");
        assert_eq!(FormKind::Contact.to_string(), "contact");
    }

    #[test]
    fn test_field_lookup() {
        let field = FormKind::B2c.field("b2c-phone").unwrap();
        assert_eq!(field.kind, FieldKind::Phone);
        assert!(FormKind::B2c.field("b2b-phone").is_none());
    }

    #[test]
    fn test_validate_form_valid() {
        let values = HashMap::from([
            ("b2c-name", "Layla"),
            ("b2c-phone", "+20 100 123 4567"),
            ("b2c-product", "recycled-cotton"),
            ("b2c-quantity", "3"),
        ]);

        let validation = validate_form(FormKind::B2c, lookup(&values));
        assert!(validation.is_valid());
        // empty optional notes still pass
        assert_eq!(validation.fields.len(), 5);
    }

    #[test]
    fn test_validate_form_reports_every_failure() {
        let values = HashMap::from([("b2b-company", "Acme"), ("b2b-email", "a@b")]);

        let validation = validate_form(FormKind::B2b, lookup(&values));
        assert!(!validation.is_valid());

        let errors: Vec<_> = validation.errors().map(|(f, e)| (f.id, e)).collect();
        assert_eq!(
            errors,
            vec![
                ("b2b-email", FieldError::InvalidEmail),
                ("b2b-product", FieldError::Required),
                ("b2b-quantity", FieldError::Required),
            ]
        );
    }

    #[test]
    fn test_optional_email_checked_when_filled() {
        let mut values = HashMap::from([
            ("contact-name", "Omar"),
            ("contact-phone", "0123 456 789"),
            ("contact-email", "not-an-email"),
            ("contact-fabric-type", "wool"),
            ("contact-quantity", "about 40 kg"),
            ("contact-condition", "water damage"),
        ]);

        let validation = validate_form(FormKind::Contact, lookup(&values));
        assert!(!validation.is_valid());
        let errors: Vec<_> = validation.errors().map(|(f, e)| (f.id, e)).collect();
        assert_eq!(errors, vec![("contact-email", FieldError::InvalidEmail)]);

        values.insert("contact-email", "");
        assert!(validate_form(FormKind::Contact, lookup(&values)).is_valid());

        values.insert("contact-email", "omar@example.com");
        assert!(validate_form(FormKind::Contact, lookup(&values)).is_valid());
    }

    #[test]
    fn test_record_collects_raw_values() {
        let values = HashMap::from([("b2c-name", "  Layla "), ("b2c-quantity", "2")]);

        let record = SubmissionRecord::collect(FormKind::B2c, lookup(&values));
        assert_eq!(record.kind, FormKind::B2c);
        assert_eq!(record.get("name"), Some("  Layla "));
        assert_eq!(record.get("notes"), Some(""));
        assert_eq!(record.fields.len(), 5);
    }

    #[test]
    fn test_record_json_shape() {
        let values = HashMap::from([
            ("contact-name", "Omar"),
            ("contact-fabric-type", "wool"),
        ]);

        let record = SubmissionRecord::collect(FormKind::Contact, lookup(&values));
        let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        assert_eq!(json["type"], "contact");
        assert_eq!(json["name"], "Omar");
        assert_eq!(json["fabricType"], "wool");
        assert_eq!(json["email"], "");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }
}
