#![no_main]
use hashrate::{bucket_index, bucketize, BucketStatistics};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|hashes: Vec<i32>| {
    match bucketize(&hashes) {
        Ok(stats) => {
            assert_eq!(stats.total(), hashes.len());
            for h in hashes {
                let range = BucketStatistics::bucket_range(bucket_index(h)).unwrap();
                assert!(range.contains(&i64::from(h)));
            }
        }
        Err(_) => assert!(hashes.is_empty()),
    }
});
