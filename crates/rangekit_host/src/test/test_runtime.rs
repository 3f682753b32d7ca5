// Tests for library registration and dispatch
use crate::lib_registry::create_standard_registry;
use crate::*;

fn answer(l: &mut CallState) -> HostResult<Value> {
    let bonus = l.opt_int(1, 0)?;
    Ok(Value::Int(42 + bonus))
}

fn name_of(l: &mut CallState) -> HostResult<Value> {
    Ok(Value::str(l.name()))
}

#[test]
fn test_unknown_function() {
    let rt = Runtime::with_file_store(RuntimeOption::default(), MemoryStore::new());
    let err = rt.call("Substr", &[]).unwrap_err();
    assert!(matches!(&err, HostError::UnknownFunction(name) if name == "Substr"));
    assert_eq!(err.to_string(), "unknown function 'Substr'");
}

#[test]
fn test_open_stdlib_selects_libraries() {
    let mut rt = Runtime::with_file_store(RuntimeOption::default(), MemoryStore::new());
    rt.open_stdlib(Stdlib::Str);
    assert!(rt.has_function("Substr"));
    assert!(!rt.has_function("ReadFile"));

    rt.open_stdlib(Stdlib::All);
    assert!(rt.has_function("ReadFile"));
    // Str was already loaded and is not registered twice
    let names: Vec<_> = rt.registry().function_names().collect();
    assert_eq!(names.iter().filter(|n| **n == "Substr").count(), 1);
}

#[test]
fn test_default_runtime_loads_everything() {
    let rt = Runtime::default();
    for name in create_standard_registry().function_names() {
        assert!(rt.has_function(name), "missing {name}");
    }
    assert!(rt.registry().get_module("str").is_some());
    assert!(rt.registry().get_module("file").is_some());
}

#[test]
fn test_host_library() {
    let mut rt = Runtime::with_file_store(RuntimeOption::default(), MemoryStore::new());
    rt.register(crate::lib_module!("host", {
        "Answer" => answer,
        "NameOf" => name_of,
    }));

    assert_eq!(rt.call("Answer", &[]).unwrap(), Value::Int(42));
    assert_eq!(rt.call("Answer", &[Value::Nil]).unwrap(), Value::Int(42));
    assert_eq!(rt.call("Answer", &[Value::Int(1)]).unwrap(), Value::Int(43));
    assert_eq!(rt.call("NameOf", &[]).unwrap(), Value::from("NameOf"));
}

#[test]
fn test_later_library_shadows_name() {
    let mut rt = Runtime::with_file_store(RuntimeOption::default(), MemoryStore::new());
    rt.open_stdlib(Stdlib::Str);
    rt.register(LibraryModule::new("override").with_function("Len", name_of));
    assert_eq!(rt.call("Len", &["abc".into()]).unwrap(), Value::from("Len"));
}

#[test]
fn test_runtime_is_shareable_across_threads() {
    fn assert_sync<T: Send + Sync>() {}
    assert_sync::<Runtime>();

    let mut rt = Runtime::with_file_store(RuntimeOption::default(), MemoryStore::new());
    rt.open_stdlib(Stdlib::Str);
    std::thread::scope(|scope| {
        for i in 0..4 {
            let rt = &rt;
            scope.spawn(move || {
                let got = rt
                    .call("Left", &["abcdef".into(), Value::Int(i)])
                    .unwrap();
                assert_eq!(got, Value::str(&"abcdef"[..i as usize]));
            });
        }
    });
}
