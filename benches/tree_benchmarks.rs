//! Benchmarks for scanning and row building.
//!
//! Run with: cargo bench --bench tree_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use notecli::domain::{FolderGuard, LogicalFolder, Note};
use notecli::index::{Catalog, FolderTree};
use notecli::tree::{ExpandedSet, build_rows};
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Folder names combined into nested paths
const SEGMENTS: &[&str] = &[
    "software",
    "projects",
    "personal",
    "reference",
    "journal",
    "ideas",
    "archive",
    "drafts",
];

/// Deterministic folder path for the `i`-th folder, up to three levels deep.
fn folder_path(i: usize) -> String {
    let a = SEGMENTS[i % SEGMENTS.len()];
    let b = SEGMENTS[(i / SEGMENTS.len()) % SEGMENTS.len()];
    match i % 3 {
        0 => a.to_string(),
        1 => format!("{a}/{b}"),
        _ => format!("{a}/{b}/n{i}"),
    }
}

/// In-memory tree with `folders` folders and `per_folder` notes in each.
fn generate_tree(folders: usize, per_folder: usize) -> FolderTree {
    let paths: Vec<String> = (0..folders).map(folder_path).collect();
    let mut tree = FolderTree::from_folders(&paths);
    for path in &paths {
        for n in 0..per_folder {
            tree = tree.with_note(path, Note::new(format!("/notes/{path}/note-{n:04}.md")));
        }
    }
    tree
}

/// Writes the same layout to disk for scan benchmarks.
fn generate_notes_dir(folders: usize, per_folder: usize) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    for i in 0..folders {
        let folder = dir.path().join(folder_path(i));
        fs::create_dir_all(&folder).expect("Failed to create folder");
        for n in 0..per_folder {
            fs::write(folder.join(format!("note-{n:04}.md")), "").expect("Failed to write note");
        }
    }
    dir
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_build_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_rows");

    for &(folders, per_folder) in &[(50, 10), (200, 25), (1000, 20)] {
        let tree = generate_tree(folders, per_folder);
        let all_expanded: ExpandedSet = tree.folders().iter().cloned().collect();
        let none_expanded = ExpandedSet::default();
        let label = format!("{folders}x{per_folder}");

        group.throughput(Throughput::Elements((folders * per_folder) as u64));
        group.bench_with_input(BenchmarkId::new("collapsed", &label), &tree, |b, tree| {
            b.iter(|| build_rows(tree, &none_expanded, ""))
        });
        group.bench_with_input(BenchmarkId::new("expanded", &label), &tree, |b, tree| {
            b.iter(|| build_rows(tree, &all_expanded, ""))
        });
        group.bench_with_input(BenchmarkId::new("query", &label), &tree, |b, tree| {
            b.iter(|| build_rows(tree, &none_expanded, "note-001"))
        });
    }

    group.finish();
}

fn bench_ancestors(c: &mut Criterion) {
    let folder = LogicalFolder::new("a/b/c/d/e/f/g/h");
    c.bench_function("ancestors_depth_8", |b| b.iter(|| folder.ancestors()));
}

fn bench_catalog_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_load");
    group.sample_size(20);

    for &(folders, per_folder) in &[(20, 10), (100, 20)] {
        let dir = generate_notes_dir(folders, per_folder);
        let roots = [dir.path().to_path_buf()];
        let label = format!("{folders}x{per_folder}");

        group.throughput(Throughput::Elements((folders * per_folder) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&label), &roots, |b, roots| {
            b.iter(|| Catalog::load(roots, &FolderGuard::permissive()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_rows, bench_ancestors, bench_catalog_load);
criterion_main!(benches);
