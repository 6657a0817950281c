use crate::models::{FolderPreset, PresetNode};

fn file(name: &str) -> PresetNode {
    PresetNode::file(name)
}

fn folder(name: &str, children: Vec<PresetNode>) -> PresetNode {
    PresetNode::folder(name, children)
}

fn preset(
    value: &str,
    label: &str,
    category: &str,
    description: &str,
    root_name: &str,
    structure: Vec<PresetNode>,
) -> FolderPreset {
    FolderPreset {
        value: value.to_string(),
        label: label.to_string(),
        category: Some(category.to_string()),
        description: Some(description.to_string()),
        root_name: root_name.to_string(),
        structure,
    }
}

/// Keys of the presets shipped in the binary, in display order.
pub const BUILTIN_KEYS: [&str; 6] = [
    "empty",
    "react-app",
    "nextjs-app",
    "node-api",
    "video-production",
    "cgi",
];

pub fn builtin_preset(key: &str) -> Option<FolderPreset> {
    let preset = match key {
        "empty" => preset(
            "empty",
            "Empty Project",
            "General",
            "A single empty root folder",
            "my-project",
            Vec::new(),
        ),
        "react-app" => preset(
            "react-app",
            "React App",
            "Web Development",
            "Vite-style React single page app",
            "react-app",
            vec![
                folder("public", vec![file("favicon.ico")]),
                folder(
                    "src",
                    vec![
                        folder("assets", vec![]),
                        folder("components", vec![]),
                        folder("hooks", vec![]),
                        file("App.tsx"),
                        file("index.css"),
                        file("main.tsx"),
                    ],
                ),
                file("index.html"),
                file("package.json"),
                file("README.md"),
                file("tsconfig.json"),
                file("vite.config.ts"),
            ],
        ),
        "nextjs-app" => preset(
            "nextjs-app",
            "Next.js App",
            "Web Development",
            "Next.js project using the app router",
            "nextjs-app",
            vec![
                folder(
                    "app",
                    vec![file("globals.css"), file("layout.tsx"), file("page.tsx")],
                ),
                folder("components", vec![folder("ui", vec![])]),
                folder("lib", vec![file("utils.ts")]),
                folder("public", vec![]),
                file("next.config.mjs"),
                file("package.json"),
                file("README.md"),
                file("tsconfig.json"),
            ],
        ),
        "node-api" => preset(
            "node-api",
            "Node.js API",
            "Web Development",
            "Express-style REST service",
            "node-api",
            vec![
                folder(
                    "src",
                    vec![
                        folder("controllers", vec![]),
                        folder("middleware", vec![]),
                        folder("models", vec![]),
                        folder("routes", vec![]),
                        file("index.js"),
                    ],
                ),
                folder("tests", vec![]),
                file(".env.example"),
                file("package.json"),
                file("README.md"),
            ],
        ),
        "video-production" => preset(
            "video-production",
            "Video Production",
            "Media Production",
            "Numbered folders for an edit from footage to delivery",
            "video-project",
            vec![
                folder(
                    "01_Footage",
                    vec![folder("A-Cam", vec![]), folder("B-Cam", vec![])],
                ),
                folder(
                    "02_Audio",
                    vec![folder("Music", vec![]), folder("SFX", vec![]), folder("VO", vec![])],
                ),
                folder("03_Graphics", vec![]),
                folder("04_Project_Files", vec![]),
                folder("05_Exports", vec![folder("Drafts", vec![]), folder("Final", vec![])]),
                folder("06_Documents", vec![file("script.txt"), file("shot_list.txt")]),
            ],
        ),
        "cgi" => preset(
            "cgi",
            "CGI Project",
            "Media Production",
            "Asset and shot layout for 3D work",
            "cgi-project",
            vec![
                folder(
                    "assets",
                    vec![
                        folder("characters", vec![]),
                        folder("props", vec![]),
                        folder("sets", vec![]),
                    ],
                ),
                folder(
                    "shots",
                    vec![
                        folder("SHOT_010", vec![folder("anim", vec![]), folder("light", vec![])]),
                        folder("SHOT_020", vec![folder("anim", vec![]), folder("light", vec![])]),
                    ],
                ),
                folder("renders", vec![]),
                folder("textures", vec![]),
                file("README.md"),
            ],
        ),
        _ => return None,
    };
    Some(preset)
}

/// The example temporary preset written into an empty store.
pub fn example_temporary_preset() -> FolderPreset {
    preset(
        "temp-example",
        "Example Temporary",
        "Temporary",
        "A sample temporary preset to get you started",
        "example-project",
        vec![
            folder(
                "src",
                vec![
                    folder("components", vec![]),
                    folder("utils", vec![]),
                    file("index.js"),
                ],
            ),
            folder("docs", vec![file("README.md")]),
        ],
    )
}
