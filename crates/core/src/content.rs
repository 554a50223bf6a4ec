//! Deterministic fallback content pools.
//!
//! When an abstract element arrives without a content payload, its module is
//! filled from these pools, indexed by an explicit position key so repeated
//! element types across the page draw different entries. The key is
//! `section * 7 + column * 3 + occurrence`: the prime multipliers spread
//! consecutive positions across small pools, and the occurrence term varies
//! fastest so same-type siblings never collide while a pool has entries to
//! spare.

use crate::object;
use serde_json::json;
use sitewright_types::AttrMap;

/// Explicit page position of one synthesized module. Passing the position
/// in (rather than advancing a hidden counter) keeps content selection
/// referentially transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolKey {
    pub section: usize,
    pub column: usize,
    pub occurrence: usize,
}

impl PoolKey {
    pub fn index(self) -> usize {
        self.section * 7 + self.column * 3 + self.occurrence
    }
}

fn pick<T: Copy>(pool: &[T], key: PoolKey) -> T {
    pool[key.index() % pool.len()]
}

/// Everything the dispatcher needs to synthesize one module's content.
#[derive(Debug, Clone, Copy)]
pub struct ContentRequest<'a> {
    pub module_type: &'a str,
    pub element_type: &'a str,
    pub role: Option<&'a str>,
    pub section_type: &'a str,
    pub is_first_section: bool,
    pub featured: bool,
    pub key: PoolKey,
}

/// Synthesizes module attributes for an element with no payload. Total:
/// unknown module types receive a generic content placeholder.
pub fn fallback_content(req: &ContentRequest) -> AttrMap {
    match req.module_type {
        "heading" => heading_content(req),
        "text" => text_content(req),
        "button" => button_content(req),
        "image" => image_content(req.element_type),
        "blurb" => blurb_content(req.key),
        "testimonial" => testimonial_content(req.key),
        "number_counter" | "bar_counter" | "circle_counter" => counter_content(req.key),
        "pricing_table" => pricing_content(req.key, req.featured),
        "accordion" => accordion_content(req.key),
        "team_member" => team_member_content(req.key),
        "contact_form" => form_content(),
        "gallery" => gallery_content(),
        "video" => video_content(),
        "divider" => divider_content(),
        _ => object(json!({ "content": "Content placeholder" })),
    }
}

const HERO_HEADLINES: [&str; 6] = [
    "Transform Your Business Today",
    "Build Something Extraordinary",
    "Innovation Meets Excellence",
    "The Future of Work Is Here",
    "Unlock Your True Potential",
    "Elevate Your Digital Experience",
];

const FEATURE_HEADLINES: [&str; 5] = [
    "Powerful Features Built for You",
    "Everything You Need to Succeed",
    "Tools That Drive Results",
    "Capabilities That Scale",
    "Features That Matter Most",
];

const CTA_HEADLINES: [&str; 5] = [
    "Ready to Get Started?",
    "Take the Next Step Today",
    "Join Thousands of Happy Users",
    "Start Your Journey Now",
    "Transform Your Workflow Today",
];

const TESTIMONIAL_TITLES: [&str; 4] =
    ["What Our Customers Say", "Trusted by Thousands", "Success Stories", "Real Results"];

const PRICING_TITLES: [&str; 4] = [
    "Simple, Transparent Pricing",
    "Fair Pricing for Everyone",
    "Choose Your Plan",
    "Pricing That Scales",
];

const FAQ_TITLES: [&str; 4] = [
    "Frequently Asked Questions",
    "Got Questions?",
    "Common Questions Answered",
    "Everything You Need to Know",
];

const TEAM_TITLES: [&str; 4] = [
    "Meet Our Team",
    "The People Behind the Product",
    "Our Talented Team",
    "Leadership Team",
];

const CONTACT_TITLES: [&str; 4] =
    ["Get in Touch", "Let's Connect", "Reach Out Today", "We'd Love to Hear From You"];

const ABOUT_TITLES: [&str; 4] = ["Our Story", "About Us", "Who We Are", "Our Mission"];

const SERVICE_TITLES: [&str; 4] =
    ["Our Services", "What We Offer", "How We Help", "Solutions for You"];

const BENEFIT_TITLES: [&str; 4] =
    ["Why Choose Us", "The Difference", "What Sets Us Apart", "Our Advantages"];

fn heading_content(req: &ContentRequest) -> AttrMap {
    let key = req.key;
    let level = match (req.element_type, req.is_first_section) {
        ("headline", true) => "h1",
        ("headline", false) => "h2",
        ("subheadline", _) => "h3",
        _ => "h2",
    };

    let text: &str = match req.role.unwrap_or_default() {
        "value_proposition" | "h1_title" => pick(&HERO_HEADLINES, key),
        "cta_headline" | "cta_title" => pick(&CTA_HEADLINES, key),
        "benefit_title" => pick(&BENEFIT_TITLES, key),
        "about_title" => pick(&ABOUT_TITLES, key),
        "contact_title" => pick(&CONTACT_TITLES, key),
        _ => section_title(req.section_type, key),
    };

    let font_size = match level {
        "h1" => 48,
        "h2" => 36,
        _ => 24,
    };
    object(json!({
        "text": text,
        "level": level,
        "font_size": font_size,
        "font_weight": "700",
        "text_align": "left",
    }))
}

fn section_title(section_type: &str, key: PoolKey) -> &'static str {
    match section_type {
        "hero" => pick(&HERO_HEADLINES, key),
        "features" => pick(&FEATURE_HEADLINES, key),
        "testimonials" => pick(&TESTIMONIAL_TITLES, key),
        "pricing" => pick(&PRICING_TITLES, key),
        "faq" => pick(&FAQ_TITLES, key),
        "team" => pick(&TEAM_TITLES, key),
        "contact" => pick(&CONTACT_TITLES, key),
        "about" => pick(&ABOUT_TITLES, key),
        "services" => pick(&SERVICE_TITLES, key),
        "cta" => pick(&CTA_HEADLINES, key),
        _ => "Discover More",
    }
}

const BENEFIT_SUMMARIES: [&str; 5] = [
    "Streamline your workflow and achieve your goals faster than ever.",
    "Boost productivity with powerful tools designed for modern teams.",
    "Save time and resources while delivering exceptional results.",
    "Transform how you work with intelligent automation.",
    "Experience the next level of efficiency and collaboration.",
];

const SECTION_SUBTITLES: [&str; 5] = [
    "Everything you need to succeed, all in one platform.",
    "Trusted by industry leaders worldwide.",
    "Built for teams that demand excellence.",
    "Designed to help you achieve more.",
    "The smarter way to get things done.",
];

const CTA_SUBHEADLINES: [&str; 5] = [
    "Join thousands of satisfied customers today.",
    "Start your free trial and see the difference.",
    "No credit card required. Get started in minutes.",
    "Be part of the community that's changing the game.",
    "Transform your workflow starting today.",
];

const PRICING_INTROS: [&str; 4] = [
    "Choose the plan that fits your needs.",
    "Transparent pricing, no hidden fees.",
    "Start free, upgrade when ready.",
    "Plans that scale with your growth.",
];

const COMPANY_STORIES: [&str; 4] = [
    "Founded with a mission to revolutionize the industry.",
    "We've helped thousands achieve their goals.",
    "Our journey started with a simple idea.",
    "Driven by innovation, powered by passion.",
];

const CONTACT_INTROS: [&str; 4] = [
    "We'd love to hear from you.",
    "Let's start a conversation.",
    "Ready to discuss your project?",
    "Our team is here to help.",
];

const SECTION_INTROS: [&str; 4] = [
    "Trusted by leading companies worldwide.",
    "Join industry leaders who trust us.",
    "Proven results across industries.",
    "Empowering businesses since day one.",
];

fn text_content(req: &ContentRequest) -> AttrMap {
    let key = req.key;
    let text: &str = match req.role.unwrap_or_default() {
        "benefit_summary" | "benefit_description" => pick(&BENEFIT_SUMMARIES, key),
        "section_subtitle" | "subheadline" => pick(&SECTION_SUBTITLES, key),
        "pricing_intro" => pick(&PRICING_INTROS, key),
        "company_story" | "about_text" => pick(&COMPANY_STORIES, key),
        "contact_intro" | "contact_info" => pick(&CONTACT_INTROS, key),
        "cta_subheadline" | "cta_text" => pick(&CTA_SUBHEADLINES, key),
        "section_intro" => pick(&SECTION_INTROS, key),
        _ => "Discover how we can help you achieve your goals and transform your business.",
    };
    object(json!({
        "content": format!("<p>{text}</p>"),
        "font_size": if req.element_type == "subheadline" { 18 } else { 16 },
        "line_height": 1.6,
    }))
}

const PRIMARY_BUTTONS: [&str; 6] = [
    "Get Started Free",
    "Start Your Trial",
    "Try It Now",
    "Begin Today",
    "Get Started",
    "Start Building",
];

const SECONDARY_BUTTONS: [&str; 6] = [
    "Learn More",
    "See How It Works",
    "View Demo",
    "Explore Features",
    "Read More",
    "Watch Video",
];

const CTA_BUTTONS: [&str; 5] = [
    "Start Free Trial",
    "Get Started Now",
    "Join for Free",
    "Claim Your Spot",
    "Unlock Access",
];

fn button_content(req: &ContentRequest) -> AttrMap {
    let key = req.key;
    let is_primary = req.element_type == "cta_primary";
    let text: &str = match req.role.unwrap_or_default() {
        "main_action" => pick(&PRIMARY_BUTTONS, key),
        "alternative_action" => pick(&SECONDARY_BUTTONS, key),
        "cta_action" | "cta_button" => pick(&CTA_BUTTONS, key),
        _ if is_primary => pick(&PRIMARY_BUTTONS, key),
        _ => pick(&SECONDARY_BUTTONS, key),
    };
    object(json!({
        "text": text,
        "link_url": "#",
        "button_style": if is_primary { "filled" } else { "outlined" },
        "size": "large",
        "full_width": false,
    }))
}

fn image_content(element_type: &str) -> AttrMap {
    let label = match element_type {
        "image_hero" => "Hero",
        "image_feature" => "Feature",
        "logo" => "Logo",
        _ => "Image",
    };
    object(json!({
        "src": placeholder_image(800, 600, label),
        "alt": "Placeholder image",
        "width": "100%",
    }))
}

const BLURBS: [(&str, &str, &str); 8] = [
    ("Lightning Fast", "Optimized for speed with sub-second response times.", "zap"),
    ("Enterprise Security", "Bank-grade encryption and SOC 2 compliance.", "shield"),
    ("Always Available", "Our team is here to help you succeed 24/7.", "headphones"),
    ("Seamless Integration", "Connect with 100+ tools you already use.", "link"),
    ("Real-time Sync", "Changes sync instantly across all devices.", "refresh-cw"),
    ("Smart Analytics", "Deep insights with custom dashboards.", "bar-chart-2"),
    ("Global Scale", "Infrastructure that grows with your business.", "globe"),
    ("API First", "Full REST API for seamless integrations.", "code"),
];

fn blurb_content(key: PoolKey) -> AttrMap {
    let (title, text, icon) = pick(&BLURBS, key);
    object(json!({
        "title": title,
        "content": format!("<p>{text}</p>"),
        "font_icon": icon,
        "icon_color": "#3b82f6",
        "icon_font_size": 48,
    }))
}

const TESTIMONIALS: [(&str, &str, &str); 6] = [
    (
        "Sarah Johnson",
        "CEO, TechStart Inc.",
        "This platform has completely transformed how we work. Our team productivity increased by 40% in just the first month.",
    ),
    (
        "Michael Chen",
        "CTO, InnovateCo",
        "The best decision we made this year. The support team is incredible and the product just works.",
    ),
    (
        "Emily Rodriguez",
        "Director of Operations, Global Solutions",
        "We've tried many solutions but nothing comes close. It's intuitive, powerful, and our clients love it.",
    ),
    (
        "David Kim",
        "Founder, StartupX",
        "Outstanding value for money. We saved thousands in the first quarter alone.",
    ),
    (
        "Amanda Foster",
        "Marketing Director, BrandWorks",
        "The analytics features alone are worth the investment. Now we have visibility we never had before.",
    ),
    (
        "James Wilson",
        "IT Manager, Enterprise Solutions",
        "Implementation was smooth and the team was incredibly helpful throughout the process.",
    ),
];

const AVATAR_COLORS: [&str; 6] = ["4F46E5", "7C3AED", "059669", "0891B2", "DC2626", "D97706"];

fn testimonial_content(key: PoolKey) -> AttrMap {
    let (name, title, quote) = pick(&TESTIMONIALS, key);
    let color = pick(&AVATAR_COLORS, key);
    let initial = name.chars().next().unwrap_or('A');
    object(json!({
        "content": format!("<p>\"{quote}\"</p>"),
        "author": name,
        "job_title": title,
        "portrait_url": avatar_image(100, color, initial),
    }))
}

const STATS: [(f64, &str, &str); 8] = [
    (99.0, "%", "Customer Satisfaction"),
    (10.0, "K+", "Happy Customers"),
    (500.0, "+", "Projects Delivered"),
    (24.0, "/7", "Support Available"),
    (150.0, "+", "Countries Served"),
    (50.0, "M+", "Tasks Completed"),
    (4.9, "\u{2605}", "Average Rating"),
    (98.0, "%", "Uptime Guarantee"),
];

fn counter_content(key: PoolKey) -> AttrMap {
    let (number, suffix, title) = pick(&STATS, key);
    object(json!({
        "number": number,
        "suffix": suffix,
        "title": title,
        "animation": true,
    }))
}

const PLANS: [(&str, u32, &[&str]); 3] = [
    ("Starter", 19, &["5 Projects", "10GB Storage", "Email Support"]),
    (
        "Professional",
        49,
        &["Unlimited Projects", "100GB Storage", "Priority Support", "Advanced Analytics"],
    ),
    (
        "Enterprise",
        99,
        &[
            "Everything in Pro",
            "Unlimited Storage",
            "24/7 Support",
            "Custom Integrations",
            "Dedicated Manager",
        ],
    ),
];

fn pricing_content(key: PoolKey, featured: bool) -> AttrMap {
    let (name, price, features) = pick(&PLANS, key);
    let feature_list = features
        .iter()
        .map(|feature| format!("\u{2022} {feature}"))
        .collect::<Vec<_>>()
        .join("\n");
    object(json!({
        "title": name,
        "price": price,
        "currency": "$",
        "period": "/month",
        "features": feature_list,
        "button_text": "Get Started",
        "featured": featured,
    }))
}

const FAQS: [(&str, &str); 10] = [
    (
        "How do I get started?",
        "Getting started is easy! Simply sign up for a free account, and you'll be guided through our quick setup process. Most users are up and running within minutes.",
    ),
    (
        "Is there a free trial?",
        "Yes! We offer a 14-day free trial with full access to all features. No credit card required. You can upgrade to a paid plan at any time.",
    ),
    (
        "Can I cancel anytime?",
        "Absolutely. There are no long-term contracts or commitments. You can cancel your subscription at any time, and you'll retain access until the end of your billing period.",
    ),
    (
        "What payment methods do you accept?",
        "We accept all major credit cards (Visa, MasterCard, American Express), PayPal, and bank transfers for annual plans.",
    ),
    (
        "Do you offer refunds?",
        "Yes, we offer a 30-day money-back guarantee. If you're not satisfied with our service, contact us within 30 days for a full refund.",
    ),
    (
        "Is my data secure?",
        "Security is our top priority. We use industry-standard encryption, regular security audits, and are SOC 2 compliant. Your data is safe with us.",
    ),
    (
        "Can I upgrade or downgrade my plan?",
        "Yes, you can change your plan at any time. When you upgrade, the new features are available immediately. Downgrades take effect at the next billing cycle.",
    ),
    (
        "Do you offer team or enterprise plans?",
        "Absolutely! We have team plans for growing businesses and custom enterprise solutions for larger organizations. Contact our sales team for details.",
    ),
    (
        "What kind of support do you offer?",
        "We provide 24/7 email support for all users, priority chat support for Pro plans, and dedicated account managers for Enterprise customers.",
    ),
    (
        "Can I import my existing data?",
        "Yes, we support importing data from most major platforms. Our migration team can assist with complex migrations for Enterprise customers.",
    ),
];

fn accordion_content(key: PoolKey) -> AttrMap {
    let (question, answer) = pick(&FAQS, key);
    object(json!({
        "title": question,
        "content": format!("<p>{answer}</p>"),
        "open": key.occurrence == 0,
    }))
}

const TEAM_MEMBERS: [(&str, &str, &str); 6] = [
    ("Alex Morgan", "CEO & Founder", "Visionary leader with 15+ years in tech."),
    ("Sarah Chen", "CTO", "Engineering expert passionate about scalable solutions."),
    ("Michael Ross", "Head of Design", "Award-winning designer focused on user experience."),
    ("Emily Watson", "VP of Marketing", "Growth strategist with proven track record."),
    ("David Kim", "Head of Product", "Product visionary obsessed with customer success."),
    ("Lisa Johnson", "Head of Sales", "Relationship builder who turns prospects into partners."),
];

fn team_member_content(key: PoolKey) -> AttrMap {
    let (name, position, bio) = pick(&TEAM_MEMBERS, key);
    let color = pick(&AVATAR_COLORS, key);
    let initial = name.chars().next().unwrap_or('A');
    object(json!({
        "name": name,
        "position": position,
        "description": format!("<p>{bio}</p>"),
        "image_url": avatar_image(300, color, initial),
    }))
}

fn form_content() -> AttrMap {
    object(json!({
        "title": "Send us a message",
        "fields": [
            { "type": "text", "label": "Name", "required": true },
            { "type": "email", "label": "Email", "required": true },
            { "type": "textarea", "label": "Message", "required": true },
        ],
        "submit_text": "Send Message",
        "success_message": "Thank you! We'll be in touch soon.",
    }))
}

fn gallery_content() -> AttrMap {
    let images: Vec<serde_json::Value> = (1..=6)
        .map(|n| {
            json!({
                "src": placeholder_logo(&format!("Logo {n}")),
                "alt": format!("Partner {n}"),
            })
        })
        .collect();
    object(json!({ "images": images, "columns": 6, "gap": 24 }))
}

fn video_content() -> AttrMap {
    object(json!({
        "src": "",
        "poster": "https://placehold.co/1280x720/1a1a2e/ffffff?text=Video+Preview",
        "autoplay": false,
        "controls": true,
    }))
}

fn divider_content() -> AttrMap {
    object(json!({ "style": "solid", "color": "#e5e7eb", "width": 100 }))
}

fn placeholder_image(width: u32, height: u32, label: &str) -> String {
    format!(
        "https://placehold.co/{width}x{height}/e2e8f0/64748b?text={}",
        urlencoding::encode(label)
    )
}

fn placeholder_logo(label: &str) -> String {
    format!(
        "https://placehold.co/200x80/e2e8f0/64748b?text={}",
        urlencoding::encode(label)
    )
}

fn avatar_image(size: u32, color: &str, initial: char) -> String {
    format!(
        "https://placehold.co/{size}x{size}/{color}/ffffff?text={}",
        urlencoding::encode(&initial.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrence_varies_fastest_so_siblings_never_collide() {
        let picks: Vec<&str> = (0..5)
            .map(|occurrence| {
                let key = PoolKey { section: 2, column: 1, occurrence };
                pick(&BLURBS, key).0
            })
            .collect();
        let mut unique = picks.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), picks.len());
    }

    #[test]
    fn same_key_always_draws_the_same_entry() {
        let key = PoolKey { section: 3, column: 0, occurrence: 2 };
        assert_eq!(pick(&TESTIMONIALS, key).0, pick(&TESTIMONIALS, key).0);
    }

    #[test]
    fn fallback_is_total_over_unknown_modules() {
        let req = ContentRequest {
            module_type: "hologram",
            element_type: "mystery",
            role: None,
            section_type: "features",
            is_first_section: false,
            featured: false,
            key: PoolKey { section: 0, column: 0, occurrence: 0 },
        };
        assert!(fallback_content(&req).contains_key("content"));
    }
}
