use proptest::prelude::*;

use advec_mem::Vector;

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    Reserve(usize),
    Resize(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        3 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0usize..64).prop_map(Op::Reserve),
        1 => (0usize..32).prop_map(Op::Resize),
    ]
}

proptest! {
    #[test]
    fn matches_std_vec_model(ops in proptest::collection::vec(op_strategy(), 0..200)) {
        let mut vec = Vector::new();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            let capacity = vec.capacity();
            match op {
                Op::Push(v) => {
                    vec.push(v).unwrap();
                    model.push(v);
                },
                Op::Pop => {
                    prop_assert_eq!(vec.pop(), model.pop());
                },
                Op::Insert(i, v) => {
                    let index = i % (model.len() + 1);
                    prop_assert_eq!(*vec.insert(index, v).unwrap(), v);
                    model.insert(index, v);
                },
                Op::Erase(i) => {
                    if !model.is_empty() {
                        let index = i % model.len();
                        vec.erase(index);
                        model.remove(index);
                    }
                },
                Op::Reserve(n) => {
                    vec.reserve(n).unwrap();
                    prop_assert_eq!(vec.capacity(), capacity.max(n));
                },
                Op::Resize(n) => {
                    vec.resize(n).unwrap();
                    model.resize(n, 0);
                    if n <= capacity {
                        prop_assert_eq!(vec.capacity(), capacity);
                    }
                },
            }
            prop_assert!(vec.len() <= vec.capacity());
            prop_assert!(vec.capacity() >= capacity);
            prop_assert_eq!(vec.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn implicit_growth_doubles_from_one(count in 1usize..300) {
        let mut vec = Vector::new();
        for i in 0..count {
            let before = vec.capacity();
            vec.push(i).unwrap();
            if before == i {
                prop_assert_eq!(vec.capacity(), if before == 0 { 1 } else { before * 2 });
            }
            else {
                prop_assert_eq!(vec.capacity(), before);
            }
        }
        prop_assert_eq!(vec.capacity(), count.next_power_of_two());
    }

    #[test]
    fn insert_places_value_and_keeps_order(
        values in proptest::collection::vec(any::<u16>(), 0..40),
        index in any::<usize>(),
        value in any::<u16>(),
    ) {
        let mut vec: Vector<u16> = values.iter().copied().collect();
        let index = index % (values.len() + 1);
        vec.insert(index, value).unwrap();
        prop_assert_eq!(vec.len(), values.len() + 1);
        prop_assert_eq!(vec[index], value);
        prop_assert_eq!(&vec[..index], &values[..index]);
        prop_assert_eq!(&vec[index + 1..], &values[index..]);
    }

    #[test]
    fn erase_removes_exactly_one(
        values in proptest::collection::vec(any::<u16>(), 1..40),
        index in any::<usize>(),
    ) {
        let mut vec: Vector<u16> = values.iter().copied().collect();
        let index = index % values.len();
        vec.erase(index);
        let mut expected = values.clone();
        expected.remove(index);
        prop_assert_eq!(vec.as_slice(), expected.as_slice());
    }

    #[test]
    fn smaller_clone_from_never_reallocates(
        dest in proptest::collection::vec(any::<i64>(), 0..40),
        source_len in 0usize..40,
    ) {
        let mut dest: Vector<i64> = dest.into_iter().collect();
        let source: Vector<i64> = (0..source_len as i64).collect();
        let capacity = dest.capacity();
        let ptr = dest.as_ptr();
        dest.clone_from(&source);
        prop_assert_eq!(dest.as_slice(), source.as_slice());
        if source_len <= capacity {
            prop_assert_eq!(dest.capacity(), capacity);
            prop_assert_eq!(dest.as_ptr(), ptr);
        }
    }

    #[test]
    fn take_from_moves_every_value(values in proptest::collection::vec(".{0,8}", 0..30)) {
        let mut source: Vector<String> = values.iter().cloned().collect();
        let mut dest = Vector::new();
        dest.take_from(&mut source);
        prop_assert_eq!(source.len(), 0);
        prop_assert_eq!(source.capacity(), 0);
        prop_assert_eq!(dest.as_slice(), values.as_slice());
    }
}
