//! Curve point test vectors.

use hex_literal::hex;

/// Repeated addition of the generator: `ADD_TEST_VECTORS[i] = [i + 1] G`.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"),
        hex!("005668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f"),
    ),
    (
        hex!("0759ca09377679ecd535a81e83039658bf40959283187c654c5416f439403cf5"),
        hex!("06f524a3400e7708d5c01a28598ad272e7455aa88778b19f93b562d7a9646c41"),
    ),
    (
        hex!("0411494b501a98abd8262b0da1351e17899a0c4ef23dd2f96fec5ba847310b20"),
        hex!("07e1b3ebac08924d2c26f409549191fcf94f3bf6f301ed3553e22dfb802f0686"),
    ),
    (
        hex!("00a7da05a4d664859ccd6e567b935cdfbfe3018c7771cb980892ef38878ae9bc"),
        hex!("0584b0c2bc833a4c88d62b387e0ef868cae2eaaa288f4ca7b34c84b46ca031b6"),
    ),
    (
        hex!("0788435d61046d3eec54d77d25bd194525f4fa26ebe6575536bc6f656656b74c"),
        hex!("013926386b9e5e908c359519eaa68c44a2430f4b4ca5d0dbdcb4231f031eb18b"),
    ),
    (
        hex!("01efc3d7c9649900fcbd03f578a8248d095bc4b6a13b3c25f9886ef971ff96fa"),
        hex!("0694e4dce951394737cf62c7ab0946d5a64940f7b9e573f4324c1d6ce9c4d991"),
    ),
    (
        hex!("0743829e0a179f8afe223fc8112dfc8d024ab6b235fd42283c4f5970259ce7b7"),
        hex!("00e67a0a63cc493225e45b9178a3375596ea2a1d7012628a328dbc14c78cd1b7"),
    ),
    (
        hex!("06eeee2b0c71d681692559735e08a2c3ba04e7347c0c18d4d49b83bb89771591"),
        hex!("072498c69f16e02231e26a6a6acaabb8714e0af1306066231dd38c233ee15216"),
    ),
    (
        hex!("0216b4f076ff47e03a05032d1c6ee17933d8de8b2b4c43eb5ad5a7e1b25d3849"),
        hex!("054b14e088019c05fd3c7ea1dadef2999de50590264fbf9ffe77692ceb241a8c"),
    ),
    (
        hex!("0320ceae3120e56f6006f7d626760f12fc276a3c7683e9b0b87c097d7be8dbde"),
        hex!("0760d1688317be9e2cf74eaa8b2d39e886a6c18a223a9ccc9b19429f2a174377"),
    ),
    (
        hex!("0408f052dfe0289ab18a69ffdcb38a303fb0766979dca58262a9fabe4a0c7632"),
        hex!("06342e6aba72fd3fef06d8274bdaf8cc86bc3eab59b3ae413f9e3cb086317923"),
    ),
    (
        hex!("066276b22edf076517b8fa9287280242555afda9ed00e78eedc9f99be8542aa3"),
        hex!("0587d4c16426bc2b24c41319ca321cc7325359ad3c9bc465e30eb9078a5c002a"),
    ),
    (
        hex!("055b1d8ab7fa62903691a92eecbead7205f512fc27ce1ec2db7120643585b23d"),
        hex!("04a5edff810fb09724e54abbcf3ad2b7a361c14440a43294021a03138701e89f"),
    ),
    (
        hex!("03ed4a45432b30fb5f765be330e5d5766d54e78c24f50a804f998cb6b043bb4c"),
        hex!("05c05669920dd017729df6116c0d616b5884dff28f158e365465016466630dc9"),
    ),
    (
        hex!("064b098ab256881bb3916f719b8c1e362b9c681446d454773d513e647f0b148d"),
        hex!("067861383870079fa6f3f3af8083d0a0d84d6f38368e0a220b521d47359ff8ce"),
    ),
    (
        hex!("00b582a82e6c8ad99e38fcbd2a4da97b37d0cdb7d776edb84a661d79ec4824ac"),
        hex!("07cf4349849204906e1b19538552fcb1565171ab453694b574c87e2a35206d9c"),
    ),
    (
        hex!("078406570d44f1293762fd99f7e42b034a8a5973542a990a1d1f35c52edf85ef"),
        hex!("03172c9af27ad47f777b89df0e215b7655a436a3d3d7a1c0a573f29f3146c1f0"),
    ),
    (
        hex!("019661066e96a8b9f06a1d136881ee924dfb6a885239caa5fd3f87a54c6b25c4"),
        hex!("05c857697280a06cbd3e29ece3dc730f5ce700e9276a83b8bd38b1e199044689"),
    ),
    (
        hex!("04bfad94c8eaa1d5281d9699d0217a69de2f432164f5837b2313c807d3123123"),
        hex!("02b8a6f5f1a15d9aebfa70820efb26114f05d3acac2057fb3e44f8b497cb8d12"),
    ),
    (
        hex!("00a32275bbdb8af5280e7290b75cefd515748a41f37c404cfc34854607ee8815"),
        hex!("01f6a68bd0480b8a5be7bbc6b77c3f8371a5ac184b8174ae32a12b0f0be3db85"),
    ),
];

/// Scalar multiplication of the generator: `(k, [k] G)`.
pub const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2e"),
        hex!("01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"),
        hex!("07a997f9f55b68e04841b7fe20b9139d21ac132ee541bc5cd78cfff3c91723e2"),
    ),
    (
        hex!("0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2d"),
        hex!("0759ca09377679ecd535a81e83039658bf40959283187c654c5416f439403cf5"),
        hex!("010adb5cbff189082a3fe5d7a6752d8d18baa55778874e606c4a9d28569b93c0"),
    ),
    (
        hex!("07ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        hex!("05a67c24760f9e92b2cbdc19671f73e2d370116eb594ba10eb228e3078ad81b3"),
        hex!("0187407c56780b3beb36df857e14d01f15f8067fd2e30258c9ddd647f40929fa"),
    ),
    (
        hex!("0000000000000000000000000000000100000000000000000000000000000007"),
        hex!("057e7208359dc9d511f24a30983a9e5edb5479caec277e2e52a0ae479b23b809"),
        hex!("078d9dfb70475d6c92337e08c6641b12f502c52d886abaa6349267c85f31313f"),
    ),
    (
        hex!("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc"),
        hex!("077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
        hex!("054d7beec5ec728223671c627557efc5c9a6508425dc6c900b7741bf60afec06"),
    ),
    (
        hex!("03f3a46c74fe7aa696334d7493f61751bbeb02a761e7ec1ea8ff882971dd7a2f"),
        hex!("020b23292505f6ab07838c2c6964c9ad98931d15786134dc2eada64e7e72c53f"),
        hex!("05ab149b5f64e25545c83021487937404d1b83c4d19144ec5c94bfcb011a515f"),
    ),
    (
        hex!("074ac11fe95e1a2c33dd74774328511a17e30b8c7d342462b5e568f8690589f0"),
        hex!("04c4fd1d068fbe675036d5376e5f826af293593dc13d4aa38b28a198f32cb16f"),
        hex!("00b5985d0419d976da55f4cde774760763be180caf3221e5e546b9d4239cb27a"),
    ),
    (
        hex!("0293e67cbcd65df69c5fff91832126a6ed310369faaa73063c6535bc6713aa31"),
        hex!("02fcaa712258e1e05f329d598dadfcc459117f1f6390207e3d801d7c3b822952"),
        hex!("049f1bb24b0869b2463b0b9aaa8591372f21beab82cc324c12a22381172dac16"),
    ),
];
