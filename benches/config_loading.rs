//! Benchmarks for cookiecutter-config loading.

use cookiecutter_config::config::{ConfigLoader, ConfigParser, JsonParser};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;
use tempfile::TempDir;

const JSON_RC: &str = r#"{
  "cookiecutters_dir": "/srv/cookiecutters/",
  "replay_dir": "/srv/replay/",
  "default_context": {
    "full_name": "Audrey Roy Greenfeld",
    "email": "audreyr@example.com",
    "github_username": "audreyr"
  },
  "abbreviations": {
    "gh": "https://github.com/{0}.git",
    "bb": "https://bitbucket.org/{0}"
  }
}"#;

fn benchmark_json_parse(c: &mut Criterion) {
    c.bench_function("json_parse", |b| {
        b.iter(|| {
            black_box(JsonParser.parse(black_box(JSON_RC)).unwrap());
        })
    });
}

#[cfg(feature = "yaml")]
fn benchmark_yaml_parse(c: &mut Criterion) {
    use cookiecutter_config::config::YamlParser;

    let yaml = serde_yaml::to_string(&JsonParser.parse(JSON_RC).unwrap()).unwrap();

    c.bench_function("yaml_parse", |b| {
        b.iter(|| {
            black_box(YamlParser.parse(black_box(&yaml)).unwrap());
        })
    });
}

#[cfg(not(feature = "yaml"))]
fn benchmark_yaml_parse(_c: &mut Criterion) {}

fn benchmark_load(c: &mut Criterion) {
    let home = TempDir::new().unwrap();
    let path = home.path().join(".cookiecutterrc");
    fs::write(&path, JSON_RC).unwrap();

    let mut group = c.benchmark_group("load");

    let loader = ConfigLoader::new().with_parser(JsonParser).with_home(home.path());
    group.bench_function("user_config", |b| {
        b.iter(|| {
            black_box(loader.load_user_config().unwrap());
        })
    });

    let empty_home = TempDir::new().unwrap();
    let defaults_only = ConfigLoader::new().with_home(empty_home.path());
    group.bench_function("defaults_only", |b| {
        b.iter(|| {
            black_box(defaults_only.load_user_config().unwrap());
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_json_parse, benchmark_yaml_parse, benchmark_load);

criterion_main!(benches);
