use crate::Seq;

/// Implements collect to `Seq`.
pub trait SeqIterator: Iterator {
    fn collect_seq(self) -> Seq<Self::Item>;

    fn collect_result_seq<I, E>(self) -> Result<Seq<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>;
}

impl<Q: Iterator> SeqIterator for Q {
    fn collect_seq(self) -> Seq<Self::Item> {
        let (lower, _) = self.size_hint();
        let mut seq = Seq::with_cap(lower);
        for item in self {
            seq.push_back(item);
        }
        seq
    }

    fn collect_result_seq<I, E>(self) -> Result<Seq<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>
    {
        let (lower, _) = self.size_hint();
        let mut seq = Seq::with_cap(lower);
        for mi in self {
            let i = mi?;
            seq.push_back(i);
        }
        Ok(seq)
    }
}

#[cfg(test)]
mod traits_tests {
    use crate::{Incr, SeqIterator};

    #[test]
    fn test_collect() {
        let items = (0..12)
            .map(|v| v as i16)
            .collect_seq()
            .iter()
            .map(|i: &i16| *i * 2)
            .collect_seq();

        assert_eq!(12, items.size());
        for (i, (item, expected)) in items.iter().zip((0..12).map(|v| v as i16 * 2)).enumerate() {
            assert_eq!(*item, expected, "at index {}", i);
        }
    }

    #[test]
    fn collect_then_apply_pattern() {
        let mut items = std::iter::repeat(3u32).take(4).collect_seq();
        items.with(Incr::by(3));
        assert_eq!(items, [3, 6, 9, 12]);
    }

    #[test]
    fn test_collect_result_stops_at_first_error() {
        let ok: Result<_, String> = vec![Ok(1), Ok(2)].into_iter().collect_result_seq();
        assert_eq!(Ok(crate::seq![1, 2]), ok);

        let failed = vec![Ok(1), Err("bad".to_string()), Ok(3)]
            .into_iter()
            .collect_result_seq();
        assert_eq!(Err("bad".to_string()), failed);
    }
}
