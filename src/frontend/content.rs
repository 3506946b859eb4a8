pub(crate) const BRAND_NAME: &str = "70Arc";
pub(crate) const TAGLINE: &str = "Powered by AI!";
pub(crate) const DESCRIPTION: &str = "AI-native systems architecting creative futures";
pub(crate) const CONTACT_EMAIL: &str = "seventyarc@proton.me";

pub(crate) struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub(crate) const MAIN_NAV: [Link; 4] = [
    Link { label: "Home", href: "/" },
    Link { label: "About", href: "/about" },
    Link { label: "Careers", href: "/careers" },
    Link { label: "Contact", href: "/contact" },
];

pub(crate) const FOOTER_COMPANY: [Link; 3] = [
    Link { label: "About", href: "/about" },
    Link { label: "Careers", href: "/careers" },
    Link { label: "Contact", href: "/contact" },
];

pub(crate) const FOOTER_SERVICES: [Link; 3] = [
    Link { label: "AI Integration", href: "/#capabilities" },
    Link { label: "Web Dev", href: "/#capabilities" },
    Link { label: "Portfolio Creation", href: "/#capabilities" },
];

pub(crate) const FOOTER_LEGAL: [Link; 3] = [
    Link { label: "Privacy Policy", href: "/privacy" },
    Link { label: "Terms of Service", href: "/terms" },
    Link { label: "Social", href: "/social" },
];

pub(crate) struct SocialChannel {
    pub name: &'static str,
    pub handle: &'static str,
    pub href: &'static str,
}

pub(crate) const SOCIAL: [SocialChannel; 3] = [
    SocialChannel {
        name: "LinkedIn",
        handle: "company/70arc",
        href: "https://linkedin.com/company/70arc",
    },
    SocialChannel {
        name: "Instagram",
        handle: "@70arc.hq",
        href: "https://instagram.com/70arc.hq",
    },
    SocialChannel {
        name: "Twitter",
        handle: "@70arc_hq",
        href: "https://twitter.com/70arc_hq",
    },
];

pub(crate) const HERO_BADGE: &str = "Artificial General Creativity";

pub(crate) struct Capability {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub metric: &'static str,
}

pub(crate) const CAPABILITIES: [Capability; 5] = [
    Capability {
        title: "Autonomous Event Intelligence",
        subtitle: "Predictive Systems",
        description: "Multi-agent reinforcement learning systems negotiate vendor contracts, forecast attendance via temporal neural networks, and autonomously reroute logistics. Zero human latency.",
        metric: "Inference <50ms",
    },
    Capability {
        title: "Generative Vision Synthesis",
        subtitle: "Diffusion-Based Capture",
        description: "Transformer-based frame selection from 10,000+ concurrent streams. Real-time latent diffusion for 4K/120fps synthesis. Edits generated before capture completes.",
        metric: "10K frames/second",
    },
    Capability {
        title: "Conversational Intelligence Layer",
        subtitle: "Large Language Model Interface",
        description: "Fine-tuned 70B parameter model with retrieval-augmented generation. Infinite context window, multilingual embeddings, anticipatory preference learning.",
        metric: "32K context",
    },
    Capability {
        title: "Persistent Neural Storage",
        subtitle: "Vector Database Architecture",
        description: "Facial recognition via ResNet-152, CLIP-based semantic search, auto-edited highlight reels via scene segmentation transformers. Lifetime latent space.",
        metric: "1B+ vectors indexed",
    },
    Capability {
        title: "Zero-Friction AI Orchestration",
        subtitle: "End-to-End Autonomy",
        description: "Reinforcement learning from human feedback optimizes production pipelines. Humans provide intent; agents execute entirety.",
        metric: "99.7% autonomous",
    },
];

pub(crate) const ATMOSPHERE_LABEL: &str = "Synthesis Gallery";
pub(crate) const ATMOSPHERE_HEADLINE: &str = "Latent Space, Rendered";

pub(crate) struct GalleryImage {
    pub src: &'static str,
    pub caption: &'static str,
}

pub(crate) const GALLERY: [GalleryImage; 8] = [
    GalleryImage { src: "/images/atmosphere/1.jpg", caption: "Diffusion Study I" },
    GalleryImage { src: "/images/atmosphere/2.jpg", caption: "Neural Bloom" },
    GalleryImage { src: "/images/atmosphere/3.jpg", caption: "Orbital Venue" },
    GalleryImage { src: "/images/atmosphere/4.jpg", caption: "Crowd Vector" },
    GalleryImage { src: "/images/atmosphere/5.jpg", caption: "Latent Stage" },
    GalleryImage { src: "/images/atmosphere/6.jpg", caption: "Signal Drift" },
    GalleryImage { src: "/images/atmosphere/7.jpg", caption: "Synthetic Dawn" },
    GalleryImage { src: "/images/atmosphere/8.jpg", caption: "Diffusion Study II" },
];

pub(crate) const TELEMETRY_QUOTE: &str =
    "70Arc operates at the intersection of neural precision and autonomous creativity.";

pub(crate) struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub highlight: bool,
}

pub(crate) const TELEMETRY_STATS: [Stat; 3] = [
    Stat { label: "Founded", value: "2024", highlight: false },
    Stat { label: "Systems", value: "Operational", highlight: true },
    Stat { label: "Autonomy", value: "99.7%", highlight: false },
];

pub(crate) const TRANSMISSION_TITLE: &str = "Initiate Link";
pub(crate) const TRANSMISSION_PLACEHOLDER: &str = "Enter frequency...";
pub(crate) const TRANSMISSION_SUCCESS: &str = "Transmission Received";
pub(crate) const TRANSMISSION_DESCRIPTION: &str =
    "Ready to deploy autonomous intelligence for your next objective? Send us a signal.";

pub(crate) struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub(crate) const TESTIMONIALS_TITLE: &str = "What Researchers Say";

pub(crate) const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "70Arc's approach to autonomous event orchestration represents a genuine breakthrough. Their multi-agent systems achieve coordination we thought was years away.",
        author: "Dr. Sarah Mitchell",
        role: "AI Research Lead",
    },
    Testimonial {
        quote: "The latency they achieve on real-time inference is remarkable. Sub-50ms for complex reasoning tasks is production-ready infrastructure.",
        author: "David Chen",
        role: "Former Research Director",
    },
    Testimonial {
        quote: "I've seen many claims about AI automation. 70Arc is the first to actually deliver end-to-end autonomous execution.",
        author: "Dr. Maria Santos",
        role: "Principal Scientist",
    },
];

pub(crate) struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub(crate) const ABOUT_BADGE: &str = "Neural Architecture";
pub(crate) const ABOUT_TITLE: &str = "We Engineer";
pub(crate) const ABOUT_ACCENT: &str = "Artificial Creativity";
pub(crate) const ABOUT_DESCRIPTION: &str = "70Arc was founded on the conviction that artificial general intelligence will reshape every creative domain. We are not adopters of AI. We are native to it.";
pub(crate) const ABOUT_MISSION: &str = "At 70 degrees, the arc of intelligence becomes self-sustaining. We design systems where human intent cascades through neural networks into executed reality.";
pub(crate) const ABOUT_MISSION_AUTHOR: &str = "Alexandra Chen, Founder";

pub(crate) const VALUES: [Pillar; 4] = [
    Pillar {
        title: "Autonomy",
        description: "Reinforcement learning optimizes every decision. Agents negotiate, predict, and execute. Human oversight at objective level only.",
        icon: "○",
    },
    Pillar {
        title: "Latency",
        description: "50 milliseconds from perception to action. Our neural architectures run on edge-compute infrastructure for real-time inference.",
        icon: "◎",
    },
    Pillar {
        title: "Intent",
        description: "State your objective. Our systems handle implementation. You remain at the level of strategy; agents handle tactics.",
        icon: "◉",
    },
    Pillar {
        title: "Persistence",
        description: "Every event and every frame is vectorized, indexed and searchable. Your data becomes training signal for future optimization.",
        icon: "●",
    },
];

pub(crate) struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub(crate) const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Alexandra Chen",
        role: "Founder & Chief Neural Architect",
        bio: "Former research scientist who saw the gap between model capability and creative deployment. Now bridges foundation models to real-world orchestration.",
    },
    TeamMember {
        name: "Marcus Webb",
        role: "Chief Technology Officer",
        bio: "Specialist in distributed training for real-time inference. Scaled models to 10,000 GPU clusters before joining 70Arc.",
    },
    TeamMember {
        name: "Sofia Rodriguez",
        role: "Head of Generative Systems",
        bio: "Computer vision researcher who turned to generative media when she realized cameras would become obsolete.",
    },
    TeamMember {
        name: "James Okonkwo",
        role: "Director of ML Infrastructure",
        bio: "ML systems engineer and architect of our distributed training and inference pipelines.",
    },
];

pub(crate) struct Milestone {
    pub year: &'static str,
    pub event: &'static str,
}

pub(crate) const MILESTONES: [Milestone; 5] = [
    Milestone { year: "2024", event: "70Arc founded in San Francisco" },
    Milestone { year: "2024", event: "First event orchestration model deployed" },
    Milestone { year: "2025", event: "Expanded to 12 GPU clusters" },
    Milestone { year: "2025", event: "Launched 70B parameter conversational model" },
    Milestone { year: "2026", event: "First fully autonomous event with zero human intervention" },
];

pub(crate) const ABOUT_STATS: [Stat; 4] = [
    Stat { label: "Parameters Trained", value: "100B+", highlight: true },
    Stat { label: "GPU Clusters", value: "12", highlight: false },
    Stat { label: "P95 Latency", value: "<50ms", highlight: false },
    Stat { label: "Hallucination Rate", value: "0", highlight: true },
];

pub(crate) const CAREERS_BADGE: &str = "Join the Neural Network";
pub(crate) const CAREERS_TITLE: &str = "Build Intelligence That";
pub(crate) const CAREERS_ACCENT: &str = "Creates";
pub(crate) const CAREERS_DESCRIPTION: &str = "We are recruiting researchers and engineers who believe artificial intelligence will subsume creative production. If you understand transformers, diffusion, and reinforcement learning, we want your mind.";

pub(crate) const CULTURE: [Pillar; 4] = [
    Pillar {
        title: "Research-Driven",
        description: "Every team member is a researcher. We publish, we experiment, we push model capabilities.",
        icon: "◇",
    },
    Pillar {
        title: "Brutal Honesty",
        description: "Models do not respond to politics. We evaluate on loss curves, benchmark performance, and real-world evaluation.",
        icon: "◆",
    },
    Pillar {
        title: "Bias for Training",
        description: "Ship models, not decks. If it cannot be deployed, it does not exist.",
        icon: "◈",
    },
    Pillar {
        title: "Cross-Modal",
        description: "NLP researchers attend computer vision reviews. Intelligence is one substrate.",
        icon: "□",
    },
];

pub(crate) const BENEFITS: [Pillar; 6] = [
    Pillar { title: "Equity Package", description: "Meaningful ownership in the future of autonomous creative systems.", icon: "◆" },
    Pillar { title: "Health & Wellness", description: "Comprehensive medical, dental, and vision. Mental health support included.", icon: "♥" },
    Pillar { title: "Flexible Location", description: "Work from our SF or NYC studios, or remote across the US.", icon: "◎" },
    Pillar { title: "Learning Budget", description: "$5,000 annual stipend for conferences, courses, and professional growth.", icon: "◇" },
    Pillar { title: "Unlimited PTO", description: "We trust you to manage your time. Take what you need to stay fresh.", icon: "○" },
    Pillar { title: "Compute Access", description: "Priority access to our GPU cluster for personal research projects.", icon: "◈" },
];

pub(crate) struct Position {
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub(crate) const POSITIONS: [Position; 4] = [
    Position {
        title: "Senior Research Scientist, Vision-Language Models",
        department: "Research",
        location: "San Francisco, CA",
        description: "Build multimodal architectures that unify vision and language understanding.",
    },
    Position {
        title: "Principal Researcher, Model Alignment",
        department: "Research",
        location: "Remote (US)",
        description: "Design feedback-driven training that keeps creative outputs reliable and safe.",
    },
    Position {
        title: "Distributed Systems Engineer, Model Serving",
        department: "Infrastructure",
        location: "New York, NY",
        description: "Scale the infrastructure that serves our models with sub-50ms latency.",
    },
    Position {
        title: "ML Operations Lead",
        department: "Infrastructure",
        location: "Remote (US)",
        description: "Orchestrate training and deployment pipelines across our GPU clusters.",
    },
];

pub(crate) const CONTACT_BADGE: &str = "Establish Connection";
pub(crate) const CONTACT_TITLE: &str = "Transmit";
pub(crate) const CONTACT_ACCENT: &str = "Training Signal";
pub(crate) const CONTACT_DESCRIPTION: &str = "Ready to deploy autonomous intelligence for your next objective? Send us your requirements. Our agents will evaluate and respond.";
pub(crate) const CONTACT_SUCCESS_TITLE: &str = "Transmission Received";
pub(crate) const CONTACT_SUCCESS_MESSAGE: &str =
    "We've received your prompt and will respond within 24-48 hours.";

pub(crate) struct Office {
    pub city: &'static str,
    pub address: &'static str,
    pub zip: &'static str,
}

pub(crate) const OFFICES: [Office; 2] = [
    Office {
        city: "San Francisco",
        address: "Primary Training Cluster",
        zip: "San Francisco, CA 94105",
    },
    Office {
        city: "New York",
        address: "Inference Edge Node",
        zip: "New York, NY 10001",
    },
];

pub(crate) struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub(crate) const PRIVACY_UPDATED: &str = "January 2026";

pub(crate) const PRIVACY_SECTIONS: [LegalSection; 5] = [
    LegalSection {
        heading: "Information We Collect",
        body: "We collect the details you submit through our contact form: name, email address, company and message. We do not collect information in the background beyond what your browser sends with every request.",
    },
    LegalSection {
        heading: "Cookies and Local Storage",
        body: "Your cookie choice and theme preference are stored in your browser's local storage. Necessary storage is always on; analytics and marketing stay off unless you enable them.",
    },
    LegalSection {
        heading: "How We Use Information",
        body: "Submitted information is used only to respond to your inquiry. We do not sell personal data.",
    },
    LegalSection {
        heading: "Your Rights",
        body: "You may request access to, correction of, or deletion of any personal data we hold about you.",
    },
    LegalSection {
        heading: "Contact",
        body: "Questions about this policy can be sent to seventyarc@proton.me.",
    },
];

pub(crate) const TERMS_SECTIONS: [LegalSection; 4] = [
    LegalSection {
        heading: "Acceptance of Terms",
        body: "By accessing this website you agree to these terms. If you do not agree, please do not use the site.",
    },
    LegalSection {
        heading: "Use of the Site",
        body: "Content on this site is provided for information only. You may not copy or redistribute it without written permission.",
    },
    LegalSection {
        heading: "Limitation of Liability",
        body: "The site is provided as is. 70Arc is not liable for any damages arising from its use.",
    },
    LegalSection {
        heading: "Changes",
        body: "We may revise these terms at any time. The current version is always published on this page.",
    },
];
