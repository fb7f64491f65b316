use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown element kind: {0}")]
pub struct ParseKindError(pub String);

macro_rules! element_kinds {
    ($($variant:ident => ($tag:literal, $display:literal),)*) => {
        /// Closed set of element kinds offered by the component library
        ///
        /// The kind is descriptive: it picks the default template and the
        /// markup tag, nothing else.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum ElementKind {
            $($variant,)*
        }

        impl ElementKind {
            pub const ALL: &'static [ElementKind] = &[$(ElementKind::$variant,)*];

            /// Serialized tag (`"productcard"`, `"button"`, ...)
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ElementKind::$variant => $tag,)*
                }
            }

            /// Label used for a freshly created element's `name`
            pub fn display_name(&self) -> &'static str {
                match self {
                    $(ElementKind::$variant => $display,)*
                }
            }
        }

        impl FromStr for ElementKind {
            type Err = ParseKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($tag => Ok(ElementKind::$variant),)*
                    _ => Err(ParseKindError(s.to_string())),
                }
            }
        }
    };
}

element_kinds! {
    // Layout
    Section => ("section", "Section"),
    Container => ("container", "Container"),
    Flex => ("flex", "Flex Container"),
    Grid => ("grid", "Grid Container"),
    Columns => ("columns", "Columns"),
    Header => ("header", "Header"),
    Footer => ("footer", "Footer"),
    Sidebar => ("sidebar", "Sidebar"),
    // Navigation
    Navbar => ("navbar", "Navbar"),
    Menu => ("menu", "Menu"),
    Breadcrumb => ("breadcrumb", "Breadcrumb"),
    // Content
    Text => ("text", "Text"),
    Heading => ("heading", "Heading"),
    Paragraph => ("paragraph", "Paragraph"),
    Link => ("link", "Link"),
    List => ("list", "List"),
    Table => ("table", "Table"),
    Code => ("code", "Code Block"),
    Quote => ("quote", "Quote"),
    // Media
    Image => ("image", "Image"),
    Video => ("video", "Video"),
    Audio => ("audio", "Audio Player"),
    Icon => ("icon", "Icon"),
    Gallery => ("gallery", "Gallery"),
    Carousel => ("carousel", "Carousel"),
    // Forms
    Input => ("input", "Input"),
    Textarea => ("textarea", "Textarea"),
    Select => ("select", "Select"),
    Checkbox => ("checkbox", "Checkbox"),
    Radio => ("radio", "Radio"),
    Button => ("button", "Button"),
    Form => ("form", "Form"),
    Slider => ("slider", "Slider"),
    Toggle => ("toggle", "Toggle"),
    LoginForm => ("loginform", "Login Form"),
    SignupForm => ("signupform", "Signup Form"),
    ContactForm => ("contactform", "Contact Form"),
    // Components
    Card => ("card", "Card"),
    Modal => ("modal", "Modal"),
    Accordion => ("accordion", "Accordion"),
    Tabs => ("tabs", "Tabs"),
    Tooltip => ("tooltip", "Tooltip"),
    Toast => ("toast", "Toast"),
    Badge => ("badge", "Badge"),
    Progress => ("progress", "Progress Bar"),
    Spinner => ("spinner", "Spinner"),
    Avatar => ("avatar", "Avatar"),
    Divider => ("divider", "Divider"),
    Tag => ("tag", "Tag"),
    // E-commerce
    ProductCard => ("productcard", "Product Card"),
    PriceTable => ("pricetable", "Pricing Table"),
    Testimonial => ("testimonial", "Testimonial"),
    Countdown => ("countdown", "Countdown Timer"),
    ChatWidget => ("chatwidget", "Chat Widget"),
    SocialMedia => ("socialmedia", "Social Media"),
    Newsletter => ("newsletter", "Newsletter"),
    Cart => ("cart", "Shopping Cart"),
    Checkout => ("checkout", "Checkout Form"),
    Shipping => ("shipping", "Shipping Tracker"),
    Coupon => ("coupon", "Coupon Code"),
    Deals => ("deals", "Deal Badge"),
    Trending => ("trending", "Trending Products"),
    Wishlist => ("wishlist", "Wishlist"),
    // Advanced
    Chart => ("chart", "Chart"),
    Map => ("map", "Map"),
    Calendar => ("calendar", "Calendar"),
    DatePicker => ("datepicker", "Date Picker"),
    Search => ("search", "Search"),
    Pagination => ("pagination", "Pagination"),
    Iframe => ("iframe", "iFrame"),
    Embed => ("embed", "Embed"),
    Canvas => ("canvas", "Canvas"),
    Svg => ("svg", "SVG"),
    Faq => ("faq", "FAQ Section"),
    Stats => ("stats", "Stats Counter"),
    Timeline => ("timeline", "Timeline"),
    Pricing => ("pricing", "Pricing Plans"),
    Team => ("team", "Team Section"),
    BlogPost => ("blogpost", "Blog Post"),
    Portfolio => ("portfolio", "Portfolio Item"),
    Hero => ("hero", "Hero"),
}

impl ElementKind {
    /// Markup tag used by the code generators (defaults to `div`)
    pub fn html_tag(&self) -> &'static str {
        use ElementKind::*;

        match self {
            Section | Hero => "section",
            Header => "header",
            Footer => "footer",
            Sidebar => "aside",
            Navbar | Menu | Breadcrumb => "nav",
            Heading => "h1",
            Text | Paragraph => "p",
            Link => "a",
            List => "ul",
            Table => "table",
            Code => "pre",
            Quote | Testimonial => "blockquote",
            Image => "img",
            Video => "video",
            Audio => "audio",
            Input | Checkbox | Radio | Slider | Search | DatePicker => "input",
            Textarea => "textarea",
            Select => "select",
            Button => "button",
            Form | LoginForm | SignupForm | ContactForm | Checkout => "form",
            Progress => "progress",
            Divider => "hr",
            Iframe | Embed => "iframe",
            Canvas => "canvas",
            Svg => "svg",
            BlogPost => "article",
            Badge | Tag | Deals => "span",
            _ => "div",
        }
    }

    /// Whether the markup tag takes no content or closing tag
    pub fn is_void(&self) -> bool {
        matches!(self.html_tag(), "img" | "input" | "hr")
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, ElementKind::Heading)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
