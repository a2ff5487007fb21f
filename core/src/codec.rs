use rkyv::rancor::Error;

use crate::snapshot::GameSnapshot;

pub fn encode(snapshot: &GameSnapshot) -> Option<Vec<u8>> {
    rkyv::to_bytes::<Error>(snapshot)
        .ok()
        .map(|bytes| bytes.into_vec())
}

pub fn decode(bytes: &[u8]) -> Option<GameSnapshot> {
    rkyv::from_bytes::<GameSnapshot, Error>(bytes).ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn garbage_bytes_decode_to_none() {
        assert!(decode(&[0x00, 0x01, 0x02]).is_none());
        assert!(decode(&[]).is_none());
    }
}
