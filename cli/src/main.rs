use clap::Parser;
use anyhow::{Context, Result};
use serde::Serialize;
use meshstream::io::{self, Config, Format, Trimesh, VertexFormat};
use meshstream::prelude::ConfigType;

#[derive(Parser)]
#[command(name = "meshstream-cli")]
#[command(about = "Decodes a .3ds or .obj mesh and prints what it contains")]
struct Cli {
    /// Input file path (.3ds or .obj)
    #[arg(short, long)]
    input: String,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Leave texture coordinates out of the vertex layout
    #[arg(long)]
    no_uv: bool,

    /// Leave normals out of the vertex layout
    #[arg(long)]
    no_normal: bool,

    /// Number of bytes fed to the decoder at a time
    #[arg(long)]
    block_size: Option<usize>,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Summary<'a> {
    input: &'a str,
    vertex_count: usize,
    vertex_size: usize,
    face_count: usize,
    tex_name: Option<&'a str>,
    objects: Vec<ObjectSummary<'a>>,
}

#[derive(Serialize)]
struct ObjectSummary<'a> {
    name: &'a str,
    start_face: u32,
    face_count: u32,
}

impl<'a> Summary<'a> {
    fn new(input: &'a str, mesh: &'a Trimesh) -> Self {
        Self {
            input,
            vertex_count: mesh.vertex_count(),
            vertex_size: mesh.vertex_size,
            face_count: mesh.faces.len(),
            tex_name: mesh.tex_name.as_deref(),
            objects: mesh.objects.iter()
                .map(|o| ObjectSummary { name: &o.name, start_face: o.start_face, face_count: o.face_count })
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if Format::from_path(&cli.input).is_none() {
        anyhow::bail!("Input file must be a .3ds or .obj file");
    }

    let mut cfg = Config::default();
    if let Some(block_size) = cli.block_size {
        cfg.block_size = block_size;
    }
    cfg.vertex_format = VertexFormat {
        position: true,
        tex_coord: !cli.no_uv,
        normal: !cli.no_normal,
    };

    let mesh = io::load_trimesh(&cli.input, &cfg)
        .with_context(|| format!("Failed to load {}", cli.input))?;
    let summary = Summary::new(&cli.input, &mesh);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!("{}", summary.input);
    println!("  vertices: {} ({} bytes each)", summary.vertex_count, summary.vertex_size);
    println!("  faces:    {}", summary.face_count);
    if let Some(tex_name) = summary.tex_name {
        println!("  texture:  {}", tex_name);
    }
    for o in &summary.objects {
        println!("  object {:?}: faces {}..{}", o.name, o.start_face, o.start_face + o.face_count);
    }
}
