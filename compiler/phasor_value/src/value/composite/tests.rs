use super::*;

mod struct_instance {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_is_empty() {
        let s = StructInstance::new("Point");
        assert_eq!(s.name(), "Point");
        assert!(s.is_empty());
        assert!(s.get("x").is_none());
    }

    #[test]
    fn set_inserts_then_overwrites() {
        let mut s = StructInstance::new("Point");
        assert!(s.set("x", Value::int(1)).is_none());
        let previous = s.set("x", Value::int(2));
        assert_eq!(previous, Some(Value::int(1)));
        assert_eq!(s.get("x"), Some(&Value::int(2)));
        assert_eq!(s.len(), 1);
        assert!(s.contains("x"));
        assert!(!s.contains("y"));
    }

    #[test]
    fn sorted_fields_orders_by_name() {
        let mut s = StructInstance::new("P");
        s.set("zeta", Value::int(3));
        s.set("alpha", Value::int(1));
        s.set("mid", Value::int(2));
        let names: Vec<&str> = s.sorted_fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}

mod array_instance {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_and_get() {
        let mut a = ArrayInstance::default();
        assert!(a.is_empty());
        a.push(Value::int(1));
        a.push(Value::string("two"));
        assert_eq!(a.len(), 2);
        assert_eq!(a.get(1), Some(&Value::string("two")));
        assert!(a.get(2).is_none());
    }

    #[test]
    fn set_in_range_replaces() {
        let mut a = ArrayInstance::new(vec![Value::int(1), Value::int(2)]);
        assert_eq!(a.set(0, Value::Bool(true)), Some(Value::int(1)));
        assert_eq!(a.as_slice(), &[Value::Bool(true), Value::int(2)]);
    }

    #[test]
    fn set_out_of_range_is_noop() {
        let mut a = ArrayInstance::new(vec![Value::int(1)]);
        assert!(a.set(5, Value::Null).is_none());
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn heterogeneous_iteration() {
        let a = ArrayInstance::new(vec![Value::Null, Value::float(1.5), Value::int(3)]);
        let kinds: Vec<_> = a.iter().map(Value::type_name).collect();
        assert_eq!(kinds, vec!["null", "float", "int"]);
    }
}

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod teardown {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEPTH: usize = 200_000;

    #[test]
    fn deep_array_chain_drops() {
        let mut value = Value::int(0);
        for _ in 0..DEPTH {
            value = Value::create_array(vec![value]);
        }
        drop(value);
    }

    #[test]
    fn deep_struct_chain_drops() {
        let mut value = Value::Null;
        for _ in 0..DEPTH {
            let node = Value::create_struct("Node");
            node.set_field("next", value).unwrap();
            value = node;
        }
        drop(value);
    }

    #[test]
    fn shared_children_outlive_their_container() {
        let child = Value::create_array(vec![Value::int(1)]);
        let record = Value::create_struct("R");
        record.set_field("items", child.clone()).unwrap();
        let parent = Value::create_array(vec![child.clone(), record]);
        drop(parent);
        assert_eq!(child.strong_count(), Some(1));
        assert_eq!(child.array_get(0).unwrap(), Value::int(1));
    }
}
