//! Home page
//!
//! Single scrolling page for Fibre Reborn:
//! - SEO meta tags
//! - Hero section with parallax
//! - About section with stat cards
//! - Service cards opening the B2C order and B2B quote modals
//! - FAQ accordion
//! - Contact section opening the contact modal
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::hover::{ACCORDION_TRANSITION, accordion_transform};
use crate::core::scroll::parallax_transform;
use crate::core::{FormKind, Locale, LocalizedText};
use crate::ui::app_context::use_site_config;
use crate::ui::common::{ModalBackdrop, ModalTrigger};
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::Navbar;
use crate::ui::quote_forms::QuoteModals;
use crate::ui::registry::{AnchorLink, ScrollEffects, ScrollReveal, use_page_registry};
use crate::ui::service_card::ServiceCard;

const SITE_TITLE: LocalizedText = LocalizedText::new(
    "Fibre Reborn - إعادة تدوير الأقمشة",
    "Fibre Reborn - Textile Recycling",
);

const SITE_DESCRIPTION: LocalizedText = LocalizedText::new(
    "نمنح الأقمشة المستعملة حياة جديدة: جمع وفرز وإعادة تدوير الألياف للأفراد والشركات.",
    "We give used textiles a second life: collection, sorting and fibre recycling for households and businesses.",
);

const HERO_HEADLINE: LocalizedText = LocalizedText::new(
    "حياة جديدة لكل خيط",
    "A new life for every thread",
);

const HERO_TAGLINE: LocalizedText = LocalizedText::new(
    "نحوّل بقايا الأقمشة إلى ألياف عالية الجودة جاهزة للتصنيع من جديد.",
    "We turn textile waste into high-quality fibre ready for manufacturing again.",
);

const ORDER_NOW: LocalizedText = LocalizedText::new("اطلب الآن", "Order now");
const REQUEST_QUOTE: LocalizedText = LocalizedText::new("اطلب عرض سعر", "Request a quote");
const LEARN_MORE: LocalizedText = LocalizedText::new("اعرف المزيد", "Learn more");

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let locale = use_site_config().locale;

    view! {
        <SeoMeta locale=locale/>

        <div class="site" dir=locale.dir() lang=locale.as_str()>
            <Navbar/>
            <HeroSection locale=locale/>
            <AboutSection locale=locale/>
            <ServicesSection locale=locale/>
            <FaqSection locale=locale/>
            <ContactSection locale=locale/>
            <Footer locale=locale/>

            <QuoteModals/>
            <ModalBackdrop/>
            <ScrollEffects/>
        </div>
    }
}

#[component]
fn SeoMeta(locale: Locale) -> impl IntoView {
    view! {
        <Title text=SITE_TITLE.get(locale)/>
        <Meta name="description" content=SITE_DESCRIPTION.get(locale)/>
        <Meta name="keywords" content="textile recycling, fibre, upcycling, إعادة تدوير, أقمشة"/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:title" content=SITE_TITLE.get(locale)/>
        <Meta property="og:description" content=SITE_DESCRIPTION.get(locale)/>
    }
}

#[component]
fn HeroSection(locale: Locale) -> impl IntoView {
    let registry = use_page_registry();
    let offset = registry.hero_offset;

    view! {
        <section
            id="home"
            node_ref=registry.hero
            class="hero-section"
            style:transform=move || parallax_transform(offset.get())
        >
            <div class="container hero-content">
                <h1 class="hero-title">{HERO_HEADLINE.get(locale)}</h1>
                <p class="hero-subtitle">{HERO_TAGLINE.get(locale)}</p>
                <div class="hero-actions">
                    <ModalTrigger target=FormKind::B2c.modal_id()>
                        {ORDER_NOW.get(locale)}
                    </ModalTrigger>
                    <AnchorLink href="#about" class="btn btn-outline-light">
                        {LEARN_MORE.get(locale)}
                    </AnchorLink>
                </div>
                <AnchorLink href="#about" class="scroll-indicator">
                    <Icon name=icons::CHEVRON_DOWN class="icon-md"/>
                </AnchorLink>
            </div>
        </section>
    }
}

/// Headline figure shown in the about section
struct Stat {
    value: &'static str,
    label: LocalizedText,
}

const STATS: &[Stat] = &[
    Stat {
        value: "120+",
        label: LocalizedText::new("طن من الأقمشة المعاد تدويرها", "tonnes of textiles recycled"),
    },
    Stat {
        value: "85%",
        label: LocalizedText::new("نسبة الألياف المستعادة", "fibre recovery rate"),
    },
    Stat {
        value: "40+",
        label: LocalizedText::new("شريك من المصانع", "factory partners"),
    },
];

#[component]
fn AboutSection(locale: Locale) -> impl IntoView {
    const HEADING: LocalizedText = LocalizedText::new("من نحن", "About us");
    const BODY: LocalizedText = LocalizedText::new(
        "Fibre Reborn شركة متخصصة في جمع الأقمشة المستعملة وفرزها وتحويلها إلى ألياف قابلة لإعادة الاستخدام، لتقليل النفايات ودعم صناعة نسيج مستدامة.",
        "Fibre Reborn collects, sorts and processes used fabric into reusable fibre, cutting waste and supporting a sustainable textile industry.",
    );

    view! {
        <section id="about" class="section about-section">
            <div class="container">
                <ScrollReveal class="section-header">
                    <h2 class="section-title">{HEADING.get(locale)}</h2>
                    <p class="section-lead">{BODY.get(locale)}</p>
                </ScrollReveal>
                <div class="row stats-row">
                    {STATS
                        .iter()
                        .map(|stat| view! {
                            <ScrollReveal class="col-md-4">
                                <div class="stat-card">
                                    <span class="stat-value">{stat.value}</span>
                                    <span class="stat-label">{stat.label.get(locale)}</span>
                                </div>
                            </ScrollReveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection(locale: Locale) -> impl IntoView {
    const HEADING: LocalizedText = LocalizedText::new("خدماتنا", "Our services");
    const B2C_TITLE: LocalizedText = LocalizedText::new("للأفراد", "For households");
    const B2C_TEXT: LocalizedText = LocalizedText::new(
        "اطلب منتجات مصنوعة من ألياف معاد تدويرها بكميات صغيرة تصل إلى باب منزلك.",
        "Order products made from recycled fibre in small quantities, delivered to your door.",
    );
    const B2B_TITLE: LocalizedText = LocalizedText::new("للشركات", "For businesses");
    const B2B_TEXT: LocalizedText = LocalizedText::new(
        "توريد ألياف معاد تدويرها بالجملة للمصانع ودور الأزياء مع عروض أسعار مخصصة.",
        "Bulk recycled fibre supply for mills and fashion houses with tailored quotes.",
    );
    const COLLECTION_TITLE: LocalizedText = LocalizedText::new("جمع الأقمشة", "Fabric collection");
    const COLLECTION_TEXT: LocalizedText = LocalizedText::new(
        "نستلم بقايا القص والأقمشة المستعملة من موقعك ونتولى الفرز والنقل.",
        "We pick up offcuts and used fabric from your site and handle sorting and transport.",
    );

    view! {
        <section id="services" class="section services-section">
            <div class="container">
                <ScrollReveal class="section-header">
                    <h2 class="section-title">{HEADING.get(locale)}</h2>
                </ScrollReveal>
                <div class="row">
                    <ScrollReveal class="col-lg-4">
                        <ServiceCard
                            icon=icons::SCISSORS
                            title=B2C_TITLE.get(locale)
                            description=B2C_TEXT.get(locale)
                        >
                            <ModalTrigger target=FormKind::B2c.modal_id()>
                                {ORDER_NOW.get(locale)}
                            </ModalTrigger>
                        </ServiceCard>
                    </ScrollReveal>
                    <ScrollReveal class="col-lg-4">
                        <ServiceCard
                            icon=icons::FACTORY
                            title=B2B_TITLE.get(locale)
                            description=B2B_TEXT.get(locale)
                        >
                            <ModalTrigger target=FormKind::B2b.modal_id()>
                                {REQUEST_QUOTE.get(locale)}
                            </ModalTrigger>
                        </ServiceCard>
                    </ScrollReveal>
                    <ScrollReveal class="col-lg-4">
                        <ServiceCard
                            icon=icons::TRUCK
                            title=COLLECTION_TITLE.get(locale)
                            description=COLLECTION_TEXT.get(locale)
                        >
                            <ModalTrigger target=FormKind::Contact.modal_id() class="btn btn-outline-primary">
                                {FormKind::Contact.title().get(locale)}
                            </ModalTrigger>
                        </ServiceCard>
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}

struct Faq {
    question: LocalizedText,
    answer: LocalizedText,
}

const FAQS: &[Faq] = &[
    Faq {
        question: LocalizedText::new("ما أنواع الأقمشة التي تقبلونها؟", "Which fabrics do you accept?"),
        answer: LocalizedText::new(
            "نقبل القطن والبوليستر والصوف والأقمشة المخلوطة، سواء كانت بقايا قص أو ملابس مستعملة.",
            "Cotton, polyester, wool and blends, whether cutting offcuts or worn garments.",
        ),
    },
    Faq {
        question: LocalizedText::new("هل هناك حد أدنى للكمية؟", "Is there a minimum quantity?"),
        answer: LocalizedText::new(
            "لا يوجد حد أدنى لطلبات الأفراد، أما طلبات الشركات فتبدأ من ١٠٠ كيلوغرام.",
            "Household orders have no minimum; business orders start at 100 kg.",
        ),
    },
    Faq {
        question: LocalizedText::new("كم يستغرق التوصيل؟", "How long does delivery take?"),
        answer: LocalizedText::new(
            "يصل معظم الطلبات خلال ٣ إلى ٥ أيام عمل.",
            "Most orders arrive within 3 to 5 working days.",
        ),
    },
];

#[component]
fn FaqSection(locale: Locale) -> impl IntoView {
    const HEADING: LocalizedText = LocalizedText::new("الأسئلة الشائعة", "Frequently asked questions");

    view! {
        <section id="faq" class="section faq-section">
            <div class="container">
                <ScrollReveal class="section-header">
                    <h2 class="section-title">{HEADING.get(locale)}</h2>
                </ScrollReveal>
                <div class="accordion">
                    {FAQS
                        .iter()
                        .map(|faq| view! {
                            <FaqItem
                                question=faq.question.get(locale)
                                answer=faq.answer.get(locale)
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item; grows slightly while expanded
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div
            class="accordion-item"
            style:transform=move || accordion_transform(is_open.get())
            style:transition=ACCORDION_TRANSITION
        >
            <h3 class="accordion-header">
                <button
                    type="button"
                    class="accordion-button"
                    class:collapsed=move || !is_open.get()
                    style:transition=ACCORDION_TRANSITION
                    on:click=move |_| set_is_open.update(|v| *v = !*v)
                    aria-expanded=move || is_open.get().to_string()
                >
                    {question}
                </button>
            </h3>
            <div class="accordion-collapse collapse" class:show=move || is_open.get()>
                <div class="accordion-body">{answer}</div>
            </div>
        </div>
    }
}

#[component]
fn ContactSection(locale: Locale) -> impl IntoView {
    const HEADING: LocalizedText = LocalizedText::new("تواصل معنا", "Get in touch");
    const BODY: LocalizedText = LocalizedText::new(
        "لديك أقمشة ترغب في إعادة تدويرها؟ أخبرنا بنوعها وكميتها وسنعود إليك.",
        "Have fabric to recycle? Tell us its type and quantity and we will get back to you.",
    );

    view! {
        <section id="contact" class="section contact-section">
            <div class="container">
                <ScrollReveal class="section-header">
                    <h2 class="section-title">{HEADING.get(locale)}</h2>
                    <p class="section-lead">{BODY.get(locale)}</p>
                    <ModalTrigger target=FormKind::Contact.modal_id() class="btn btn-primary btn-lg">
                        {FormKind::Contact.title().get(locale)}
                    </ModalTrigger>
                </ScrollReveal>
                <div class="contact-details">
                    <a class="contact-detail" href="tel:+966500000000">
                        <Icon name=icons::PHONE class="icon-text"/>
                        <span dir="ltr">"+966 50 000 0000"</span>
                    </a>
                    <a class="contact-detail" href="mailto:hello@fibrereborn.com">
                        <Icon name=icons::MAIL class="icon-text"/>
                        <span>"hello@fibrereborn.com"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer(locale: Locale) -> impl IntoView {
    const RIGHTS: LocalizedText = LocalizedText::new("جميع الحقوق محفوظة", "All rights reserved");

    view! {
        <footer class="footer">
            <div class="container footer-content">
                <AnchorLink href="#home" class="footer-brand">
                    <Icon name=icons::RECYCLE class="brand-icon"/>
                    <span>"Fibre Reborn"</span>
                </AnchorLink>
                <p class="footer-text">{SITE_DESCRIPTION.get(locale)}</p>
                <p class="footer-copy">"© Fibre Reborn. " {RIGHTS.get(locale)}</p>
            </div>
        </footer>
    }
}
