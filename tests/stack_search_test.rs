use anyhow::Result;
use design_intel::config::available_stacks;
use design_intel::utils::logger::{init_logger, LogFormat};
use design_intel::{DataLoader, LocalStorage, SearchEngine};
use std::fs;
use tempfile::TempDir;

const REACT: &str = "Category,Keywords,Pattern Name,Code Snippet / Rule,Explanation\n\
State,usestate hooks,Local state,\"const [v, setV] = useState(0)\",Keep state close to use\n\
Effects,useeffect cleanup hooks,Effect cleanup,return () => unsubscribe(),Avoid leaks\n\
Rendering,memo list keys,Stable keys,key={item.id},Keys must be stable\n";

fn data_dir() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::create_dir_all(temp_dir.path().join("stacks"))?;
    Ok(temp_dir)
}

#[test]
fn test_stack_search_projects_fixed_shape() -> Result<()> {
    init_logger(false, LogFormat::Json);

    let temp_dir = data_dir()?;
    fs::write(temp_dir.path().join("stacks/react.csv"), REACT)?;

    let engine = SearchEngine::local(temp_dir.path());
    let results = engine.search_stack("hooks cleanup", "react", 3);

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].iter().collect::<Vec<_>>(),
        vec![
            ("Category", "Effects"),
            ("Pattern", "Effect cleanup"),
            ("Code/Rule", "return () => unsubscribe()"),
            ("Explanation", "Avoid leaks"),
        ]
    );
    assert_eq!(results[1].get("Pattern"), Some("Local state"));
    Ok(())
}

#[test]
fn test_stack_search_ignores_non_search_columns() -> Result<()> {
    let temp_dir = data_dir()?;
    fs::write(temp_dir.path().join("stacks/react.csv"), REACT)?;

    // "unsubscribe" only appears in the code column, which is not searched.
    let engine = SearchEngine::local(temp_dir.path());
    assert!(engine.search_stack("unsubscribe", "react", 3).is_empty());
    Ok(())
}

#[test]
fn test_every_supported_stack_reads_its_own_file() -> Result<()> {
    let temp_dir = data_dir()?;
    for stack in available_stacks() {
        fs::write(
            temp_dir.path().join(format!("stacks/{}.csv", stack)),
            format!("Category,Keywords,Pattern Name\nLayout,{} layout,{} pattern\n", stack, stack),
        )?;
    }

    let engine = SearchEngine::local(temp_dir.path());
    for stack in available_stacks() {
        let results = engine.search_stack(stack, stack, 3);
        assert_eq!(results.len(), 1, "stack {}", stack);
        assert_eq!(results[0].get("Pattern"), Some(format!("{} pattern", stack).as_str()));
    }
    Ok(())
}

#[test]
fn test_unsupported_stack_even_when_file_exists() -> Result<()> {
    let temp_dir = data_dir()?;
    fs::write(temp_dir.path().join("stacks/angular.csv"), REACT)?;

    let engine = SearchEngine::local(temp_dir.path());
    let results = engine.search_stack("hooks", "angular", 3);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].get("error"), Some("Stack not supported: angular"));
    Ok(())
}

#[test]
fn test_loader_reports_unreadable_stack_file() -> Result<()> {
    let temp_dir = data_dir()?;
    fs::create_dir(temp_dir.path().join("stacks/flutter.csv"))?;

    let loader = DataLoader::new(LocalStorage::new(temp_dir.path()));
    let failure = loader.load_stack_data("flutter").unwrap_err();
    assert!(failure.rows.is_empty());

    let engine = SearchEngine::local(temp_dir.path());
    assert_eq!(
        engine.search_stack("layout", "flutter", 3)[0].get("error"),
        Some("No data found for stack: flutter")
    );
    Ok(())
}
