//! End-to-end workflow tests: real services, in-memory adapters.

use std::path::{Path, PathBuf};

use sprig_adapters::{MemoryFilesystem, RecordingReporter, ReporterEvent, ScriptedRunner};
use sprig_core::{
    application::{
        ApplicationError, BootstrapService, ComponentService,
        ports::{CommandResult, Step},
        services::{PatchOutcome, patch_anchor},
    },
    domain::{ComponentSpec, ProjectSpec},
    error::SprigError,
};

const VIEWPORT_META: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1" />"#;

const KIT_MANIFEST: &str = r#"{
    "name": "demo",
    "devDependencies": { "@sveltejs/kit": "^2.0.0", "vite": "^5.0.0" }
}"#;

fn app_html() -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\t<meta charset=\"utf-8\" />\n\t{VIEWPORT_META}\n\t%sveltekit.head%\n</head>\n<body>%sveltekit.body%</body>\n</html>"
    )
}

fn bootstrap_service(
    runner: &ScriptedRunner,
    fs: &MemoryFilesystem,
    reporter: &RecordingReporter,
) -> BootstrapService {
    BootstrapService::new(
        Box::new(runner.clone()),
        Box::new(fs.clone()),
        Box::new(reporter.clone()),
    )
}

fn failed(exit_code: i32, stderr: &str) -> CommandResult {
    CommandResult {
        exit_code,
        stdout: String::new(),
        stderr: stderr.to_string(),
        timed_out: false,
    }
}

// ── Workflow A ────────────────────────────────────────────────────────────────

#[test]
fn full_create_workflow_with_reset_styles() {
    let runner = ScriptedRunner::new();
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();

    fs.add_dir("/work");
    // What the (mocked) scaffold step would have produced.
    fs.add_file("/work/demo/src/app.html", app_html());

    let spec = ProjectSpec::new("demo", "/work", true).unwrap();
    let path = bootstrap_service(&runner, &fs, &reporter)
        .create_project(&spec)
        .unwrap();
    assert_eq!(path, PathBuf::from("/work/demo"));

    // The three external tools ran, in order, with their documented shapes.
    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 3);
    assert_eq!(invocations[0].program(), "npx");
    assert_eq!(invocations[0].arg_list()[..2], ["sv", "create"]);
    assert_eq!(invocations[0].input(), Some("y\n"));
    assert_eq!(invocations[0].cwd(), Path::new("/work"));
    assert_eq!(
        invocations[1].arg_list(),
        ["sv", "add", "prettier", "--no-install"]
    );
    assert_eq!(invocations[1].cwd(), Path::new("/work/demo"));
    assert_eq!(invocations[2].program(), "yarn");
    assert_eq!(invocations[2].arg_list(), ["add", "-D", "sass-embedded"]);

    // Reset stylesheet landed and app.html links it exactly once.
    let reset = fs
        .file_content(Path::new("/work/demo/src/lib/styles/reset.css"))
        .expect("reset.css written");
    assert!(reset.contains("box-sizing"));

    let html = fs
        .file_content(Path::new("/work/demo/src/app.html"))
        .unwrap();
    assert_eq!(
        html.matches("<link rel=\"stylesheet\" href=\"/src/lib/styles/reset.css\" />")
            .count(),
        1
    );

    // Every step was announced and completed.
    let events = reporter.events();
    for step in [
        Step::ScaffoldProject,
        Step::AddPrettier,
        Step::AddSassEmbedded,
        Step::WriteResetStylesheet,
        Step::PatchEntryHtml,
    ] {
        assert!(events.contains(&ReporterEvent::Started(step)));
        assert!(events.contains(&ReporterEvent::Completed(step)));
    }
}

#[test]
fn create_without_reset_styles_only_runs_the_tools() {
    let runner = ScriptedRunner::new();
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();
    fs.add_dir("/work");

    let spec = ProjectSpec::new("demo", "/work", false).unwrap();
    bootstrap_service(&runner, &fs, &reporter)
        .create_project(&spec)
        .unwrap();

    assert_eq!(runner.invocations().len(), 3);
    assert!(fs.list_files().is_empty());
}

#[test]
fn scaffold_failure_stops_the_pipeline() {
    let runner = ScriptedRunner::new();
    runner.push_result(Ok(failed(1, "npm ERR! network")));
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();
    fs.add_dir("/work");

    let spec = ProjectSpec::new("demo", "/work", true).unwrap();
    let err = bootstrap_service(&runner, &fs, &reporter)
        .create_project(&spec)
        .unwrap_err();

    match err {
        SprigError::Application(ApplicationError::ToolFailed { stderr, .. }) => {
            assert!(stderr.contains("npm ERR!"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // Prettier and sass were never invoked; nothing was written.
    assert_eq!(runner.invocations().len(), 1);
    assert!(fs.list_files().is_empty());
}

#[test]
fn timed_out_scaffold_reports_timeout_and_no_path() {
    let runner = ScriptedRunner::new();
    runner.push_result(Ok(CommandResult::timed_out()));
    let fs = MemoryFilesystem::new();
    fs.add_dir("/work");

    let spec = ProjectSpec::new("demo", "/work", false).unwrap();
    let err = bootstrap_service(&runner, &fs, &RecordingReporter::new())
        .create_project(&spec)
        .unwrap_err();

    assert!(matches!(
        err,
        SprigError::Application(ApplicationError::Timeout { seconds: 120, .. })
    ));
}

#[test]
fn missing_viewport_anchor_is_a_warning_not_a_failure() {
    let runner = ScriptedRunner::new();
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();
    fs.add_dir("/work");
    fs.add_file("/work/demo/src/app.html", "<head></head>");

    let spec = ProjectSpec::new("demo", "/work", true).unwrap();
    bootstrap_service(&runner, &fs, &reporter)
        .create_project(&spec)
        .unwrap();

    let warnings = reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("viewport meta tag not found"));
    // File untouched.
    assert_eq!(
        fs.file_content(Path::new("/work/demo/src/app.html")).unwrap(),
        "<head></head>"
    );
}

#[test]
fn patching_twice_inserts_the_link_once() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/proj/src/app.html", app_html());

    let path = Path::new("/proj/src/app.html");
    let insertion = "\n\t<link rel=\"stylesheet\" href=\"/src/lib/styles/reset.css\" />";

    let first = patch_anchor(&fs, path, VIEWPORT_META, insertion).unwrap();
    assert_eq!(first, PatchOutcome::Inserted);
    let second = patch_anchor(&fs, path, VIEWPORT_META, insertion).unwrap();
    assert_eq!(second, PatchOutcome::AlreadyPresent);

    let html = fs.file_content(path).unwrap();
    assert_eq!(html.matches("reset.css").count(), 1);
}

// ── Workflow B ────────────────────────────────────────────────────────────────

fn seed_project(fs: &MemoryFilesystem, root: &str) {
    fs.add_file(format!("{root}/package.json"), KIT_MANIFEST);
    fs.add_dir(format!("{root}/src"));
}

#[test]
fn component_pair_is_created_inside_a_valid_project() {
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();
    seed_project(&fs, "/proj");

    let service = ComponentService::new(Box::new(fs.clone()), Box::new(reporter.clone()));
    let spec = ComponentSpec::new("widgets/cardItem").unwrap();
    let paths = service.create_component(Path::new("/proj"), &spec).unwrap();

    assert_eq!(
        paths.source,
        PathBuf::from("/proj/src/lib/components/widgets/cardItem/CardItem.svelte")
    );

    let source = fs.file_content(&paths.source).unwrap();
    assert!(source.contains("import styles from './CardItem.module.scss';"));
    assert!(source.contains("{styles.container}"));
    assert!(source.contains("<h1>CardItem</h1>"));

    let module = fs.file_content(&paths.style_module).unwrap();
    assert!(module.contains(".container"));

    // Created paths were reported.
    let details: Vec<_> = reporter
        .events()
        .into_iter()
        .filter(|event| matches!(event, ReporterEvent::Detail(_)))
        .collect();
    assert_eq!(details.len(), 2);
}

#[test]
fn component_creation_refuses_non_projects() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/elsewhere/package.json", r#"{ "dependencies": { "react": "^18" } }"#);
    fs.add_dir("/elsewhere/src");

    let service = ComponentService::new(Box::new(fs.clone()), Box::new(RecordingReporter::new()));
    let spec = ComponentSpec::new("button").unwrap();
    let err = service
        .create_component(Path::new("/elsewhere"), &spec)
        .unwrap_err();

    assert!(matches!(
        err,
        SprigError::Application(ApplicationError::NotAProject { .. })
    ));
    // Only the seeded manifest exists; nothing else was written.
    assert_eq!(fs.list_files().len(), 1);
}

#[test]
fn component_creation_refuses_project_without_src() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/proj/package.json", KIT_MANIFEST);

    let service = ComponentService::new(Box::new(fs.clone()), Box::new(RecordingReporter::new()));
    let spec = ComponentSpec::new("button").unwrap();
    assert!(service.create_component(Path::new("/proj"), &spec).is_err());
}
