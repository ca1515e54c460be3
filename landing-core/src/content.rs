//! Static page copy

/// One card in the feature grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl FeatureEntry {
    const fn new(icon: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
        }
    }
}

/// All feature cards, in display order
pub static FEATURES: [FeatureEntry; 6] = [
    FeatureEntry::new(
        "🚀",
        "Fast Performance",
        "Lightning-fast loading times and optimized performance for the best user experience.",
    ),
    FeatureEntry::new(
        "🔒",
        "Secure & Reliable",
        "Enterprise-grade security with 99.9% uptime guarantee for your peace of mind.",
    ),
    FeatureEntry::new(
        "📱",
        "Mobile Responsive",
        "Perfectly designed for all devices, from mobile phones to desktop computers.",
    ),
    FeatureEntry::new(
        "⚡",
        "Easy Integration",
        "Simple APIs and comprehensive documentation for seamless integration.",
    ),
    FeatureEntry::new(
        "🌍",
        "Global Scale",
        "Deploy anywhere in the world with our global CDN and edge locations.",
    ),
    FeatureEntry::new(
        "💡",
        "24/7 Support",
        "Round-the-clock support from our expert team to help you succeed.",
    ),
];

/// Hero section copy
#[derive(Clone, Copy, Debug)]
pub struct HeroCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub static HERO: HeroCopy = HeroCopy {
    title: "Welcome to Our Amazing Platform",
    subtitle: "Build, deploy, and scale your applications with ease. \
               Experience the power of modern web development.",
};

/// Footer copy
#[derive(Clone, Copy, Debug)]
pub struct FooterCopy {
    pub copyright: &'static str,
    pub credit: &'static str,
}

pub static FOOTER: FooterCopy = FooterCopy {
    copyright: "© 2024 Landing Page. All rights reserved.",
    credit: "Built with ❤️ using Rust and axum",
};
