use super::project::{Links, ProjectRecord};
use crate::types::identifiers::ProjectId;

fn record(
    id: u32,
    title: &str,
    description: &str,
    tags: &[&str],
    categories: &[&str],
    image: &str,
    links: Links,
) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        image: image.to_string(),
        links,
    }
}

pub(crate) fn records() -> Vec<ProjectRecord> {
    vec![
        record(
            1,
            "Project M-AI-D",
            "AI-powered lumbar spine detection using advanced computer vision and transfer learning techniques for medical imaging applications.",
            &["AI/ML", "Computer Vision", "Medical"],
            &["ai", "vision"],
            "project-maid-thumb.jpg",
            Links::new().with("demo", "#").with("github", "#"),
        ),
        record(
            2,
            "THRILS XR Training",
            "Immersive surgical training platform combining VR technology with haptic feedback for enhanced learning experiences.",
            &["XR", "VR", "Training", "Healthcare"],
            &["robotics", "vision"],
            "thrils-thumb.jpg",
            Links::new().with("demo", "#").with("publication", "#"),
        ),
        record(
            3,
            "Smart OR System",
            "Gaze-contingent surgical lighting system using eye-tracking technology and Raspberry Pi embedded computing.",
            &["Eye Tracking", "IoT", "Embedded"],
            &["electronics", "vision"],
            "smart-or-thumb.jpg",
            Links::new().with("demo", "#").with("github", "#"),
        ),
        record(
            4,
            "Agricultural Drone Vision",
            "AI-powered computer vision system for autonomous crop monitoring and precision agriculture applications.",
            &["Drones", "Agriculture", "Computer Vision"],
            &["ai", "vision"],
            "agri-drone-thumb.jpg",
            Links::new().with("demo", "#"),
        ),
        record(
            5,
            "Robotic Surgery Assistant",
            "Advanced robotic system with AI-powered decision support for minimally invasive surgical procedures.",
            &["Robotics", "AI", "Surgery"],
            &["robotics", "ai"],
            "robot-surgery-thumb.jpg",
            Links::new().with("publication", "#"),
        ),
        record(
            6,
            "Encoder Diagnostic System",
            "High-precision electronic design and development of optical encoders for metrology applications at Renishaw PLC.",
            &["Electronics", "PCB Design", "Metrology"],
            &["electronics"],
            "renishaw-encoder-thumb.jpg",
            Links::new().with("demo", "#"),
        ),
    ]
}
