//! The hardcoded content of the site.

use crate::types::{
    FeatureEntry, FeatureSize, Icon, LegalDocument, LegalSection, Screenshot, Stat,
};

/// Feature showcase cards, in grid order.
pub const FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        icon: Icon::Zap,
        title: "Turbo Performance",
        description: "Instant file loading and zero-latency code editing even with thousands of lines of code.",
        size: FeatureSize::Wide,
    },
    FeatureEntry {
        icon: Icon::Code2,
        title: "Intelligent Syntax",
        description: "Desktop-grade highlighting for HTML, CSS, JS and more.",
        size: FeatureSize::Regular,
    },
    FeatureEntry {
        icon: Icon::Monitor,
        title: "Live Preview",
        description: "See your changes instantly with a built-in web browser for rapid testing.",
        size: FeatureSize::Regular,
    },
    FeatureEntry {
        icon: Icon::Smartphone,
        title: "True Mobility",
        description: "A custom symbols toolbar designed natively for touch devices.",
        size: FeatureSize::Wide,
    },
    FeatureEntry {
        icon: Icon::ShieldCheck,
        title: "Zero Permissions",
        description: "Maximum privacy. No invasive data collection, works 100% offline.",
        size: FeatureSize::Wide,
    },
];

/// Gallery images, in display order.
pub const SCREENSHOTS: &[Screenshot] = &[
    Screenshot {
        src: "/screenshot1.jpeg",
        alt: "CodeX Mobile IDE Dashboard - Manage Projects",
    },
    Screenshot {
        src: "/screenshot2.jpeg",
        alt: "Mobile VS Code Editor - Professional Syntax Highlighting",
    },
    Screenshot {
        src: "/screenshot3.jpeg",
        alt: "Mobile Code Editor for Android - VS Code Interface",
    },
    Screenshot {
        src: "/screenshot4.jpeg",
        alt: "CodeX IDE - Multi-language support on mobile",
    },
    Screenshot {
        src: "/screenshot5.jpeg",
        alt: "Live Web Preview for Mobile Development",
    },
    Screenshot {
        src: "/screenshot6.jpeg",
        alt: "CodeX - Professional Mobile Coding Environment",
    },
];

/// Stats row.
pub const STATS: &[Stat] = &[
    Stat {
        value: "100%",
        label: "Offline",
    },
    Stat {
        value: "60FPS",
        label: "Performance",
    },
    Stat {
        value: "0.0",
        label: "Permissions",
    },
    Stat {
        value: "∞",
        label: "Possibilities",
    },
];

/// Privacy policy.
pub const PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    sections: &[
        LegalSection {
            heading: "1. Zero Data Collection",
            body: "CodeX is built on a \"Privacy by Design\" philosophy. We do not collect, process, or store any of your personal data, code, or project information outside of your own device. There are no tracking scripts, analytics, or background data transmissions.",
            contact_email: None,
        },
        LegalSection {
            heading: "2. Zero Permissions Policy",
            body: "CodeX is designed to be fully functional without requiring any invasive system permissions. We do not access your contacts, location, camera, or any other personal system APIs. The app operates entirely within its own secure sandbox on your device.",
            contact_email: None,
        },
        LegalSection {
            heading: "3. Absolute Privacy",
            body: "All your creative work, intellectual property, and project files remain 100% under your control on your physical device at all times. We have no access to your code, and we never will.",
            contact_email: None,
        },
        LegalSection {
            heading: "4. Contact Information",
            body: "For any privacy-related questions or support inquiries, please contact the developer team at",
            contact_email: Some(crate::site::SUPPORT_EMAIL),
        },
    ],
};

/// Terms of service.
pub const TERMS_OF_SERVICE: LegalDocument = LegalDocument {
    title: "Terms of Service",
    sections: &[
        LegalSection {
            heading: "1. License & Usage",
            body: "CodeX is provided \"as is\" under the MIT License. You are granted permission to use the software for personal and commercial development. Redistribution of the software itself is governed by the terms of the license.",
            contact_email: None,
        },
        LegalSection {
            heading: "2. Limitation of Liability",
            body: "The developers of CodeX are not responsible for any data loss, project corruption, or productivity loss that may occur through the use of the application. Users are encouraged to maintain external backups of critical codebases.",
            contact_email: None,
        },
        LegalSection {
            heading: "3. Compliance",
            body: "By using CodeX, you agree to comply with all applicable local and international laws regarding software usage and data protection.",
            contact_email: None,
        },
    ],
};
